//! Parse failures

use thiserror::Error;

use crate::codesim::cursor::Cursor;
use crate::codesim::lexer::{next_token, Trivia};
use crate::codesim::location::Position;

/// Parsing stopped before the end of the input.
///
/// The position is the furthest point any production reached before giving up:
/// just past the last token some alternative accepted. An error deep inside a
/// block is reported there, not at the start of the block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("unexpected {found:?} at {position}")]
    UnexpectedToken {
        position: Position,
        offset: usize,
        found: String,
    },
    #[error("unrecognized character {found:?} at {position}")]
    UnrecognizedCharacter {
        position: Position,
        offset: usize,
        found: char,
    },
    #[error("unexpected end of input at {position}")]
    UnexpectedEnd { position: Position, offset: usize },
}

impl ParseFailure {
    /// Describe what sits at `cursor`
    pub(crate) fn at(cursor: &Cursor<'_>) -> Self {
        let position = cursor.position();
        let offset = cursor.offset();
        if cursor.is_at_end() {
            return ParseFailure::UnexpectedEnd { position, offset };
        }
        match next_token(&mut cursor.fork(), Trivia::Keep) {
            Some(token) => ParseFailure::UnexpectedToken {
                position,
                offset,
                found: token.text.to_string(),
            },
            None => ParseFailure::UnrecognizedCharacter {
                position,
                offset,
                found: cursor.remaining().chars().next().unwrap_or_default(),
            },
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseFailure::UnexpectedToken { position, .. }
            | ParseFailure::UnrecognizedCharacter { position, .. }
            | ParseFailure::UnexpectedEnd { position, .. } => *position,
        }
    }

    /// Byte offset into the source
    pub fn offset(&self) -> usize {
        match self {
            ParseFailure::UnexpectedToken { offset, .. }
            | ParseFailure::UnrecognizedCharacter { offset, .. }
            | ParseFailure::UnexpectedEnd { offset, .. } => *offset,
        }
    }
}
