//! Cursor-driven tokenization
//!
//! The parser never works on a pre-computed token vector. Every production pulls
//! the next token straight from its own cursor branch through [`next_token`], so
//! a failed alternative simply drops its branch and nothing has to be rewound.
//! [`tokenize_all`] is the batch form used by tooling and by the `tokens` output.

use logos::Logos;
use thiserror::Error;
use tracing::trace;

use super::tokens::{Lexeme, Token, TokenKind};
use crate::codesim::cursor::Cursor;
use crate::codesim::location::Position;

/// What to do with whitespace, line feeds and comments after a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trivia {
    /// Return trivia as tokens of its own
    Keep,
    /// Consume trivia following the token, so the next production starts on
    /// meaningful text
    Skip,
}

/// Tokenization stopped on text no recognizer accepts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized character {found:?} at {position}")]
pub struct TokenizeError {
    pub position: Position,
    pub offset: usize,
    pub found: char,
}

/// Recognise one token at `cursor` and advance past it.
///
/// With [`Trivia::Skip`] the trailing whitespace and comments are consumed too.
/// Returns `None`, leaving `cursor` untouched, when nothing matches.
pub fn next_token<'a>(cursor: &mut Cursor<'a>, trivia: Trivia) -> Option<Token<'a>> {
    let mut branch = cursor.fork();
    let token = recognize(&mut branch)?;
    if trivia == Trivia::Skip {
        skip_trivia(&mut branch);
    }
    branch.commit(cursor);
    Some(token)
}

/// Consume any run of whitespace, line feeds, `//` and `/* */` comments.
///
/// An unterminated block comment runs to the end of the input.
pub fn skip_trivia(cursor: &mut Cursor<'_>) {
    loop {
        let mut branch = cursor.fork();
        let Some(token) = recognize(&mut branch) else {
            return;
        };
        match token.lexeme {
            lexeme if lexeme.is_trivia() => {}
            lexeme if lexeme.is_comment() => {
                branch.advance(comment_len(lexeme, branch.remaining()));
            }
            _ => return,
        }
        branch.commit(cursor);
    }
}

/// Bytes of comment text after its opening `//` or `/*`, closing `*/` included
fn comment_len(opening: Lexeme, rest: &str) -> usize {
    match opening {
        Lexeme::BlockCommentOpen => rest.find("*/").map_or(rest.len(), |end| end + 2),
        _ => rest.find('\n').unwrap_or(rest.len()),
    }
}

/// Offset of the next unescaped `delimiter` in `rest`, if it closes on the same line
pub(crate) fn closing_quote(rest: &str, delimiter: char) -> Option<usize> {
    let mut escaped = false;
    for (index, ch) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '\n' => return None,
            ch if ch == delimiter => return Some(index),
            _ => {}
        }
    }
    None
}

/// Like [`next_token`], but comments and quoted literals come out as one token
/// each, whatever text they hold.
fn scan<'a>(cursor: &mut Cursor<'a>, trivia: Trivia) -> Option<Token<'a>> {
    let remaining = cursor.remaining();
    let first = recognize(&mut cursor.fork())?;
    let after = &remaining[first.text.len()..];
    let (kind, extra) = match first.lexeme {
        lexeme if lexeme.is_comment() => (TokenKind::Comment, comment_len(lexeme, after)),
        Lexeme::DoubleQuote => match closing_quote(after, '"') {
            Some(end) => (TokenKind::Text, end + 1),
            None => (first.kind, 0),
        },
        Lexeme::SingleQuote => match closing_quote(after, '\'') {
            Some(end) => (TokenKind::Text, end + 1),
            None => (first.kind, 0),
        },
        _ => (first.kind, 0),
    };
    let length = first.text.len() + extra;

    let mut branch = cursor.fork();
    let mut text = branch.fork();
    text.advance(length);
    let location = text.commit(&mut branch);
    if trivia == Trivia::Skip {
        skip_trivia(&mut branch);
    }
    branch.commit(cursor);
    Some(Token {
        kind,
        ..Token::new(first.lexeme, &remaining[..length], location)
    })
}

/// Tokenize everything left in `cursor`.
///
/// Comments and string or char literals are single tokens, so text inside them
/// never has to be a token of its own.
///
/// Either the whole input is tokenized and the cursor ends up at the end, or an
/// error is returned and the cursor has not moved.
pub fn tokenize_all<'a>(
    cursor: &mut Cursor<'a>,
    trivia: Trivia,
) -> Result<Vec<Token<'a>>, TokenizeError> {
    let mut branch = cursor.fork();
    if trivia == Trivia::Skip {
        skip_trivia(&mut branch);
    }

    let mut tokens = Vec::new();
    while !branch.is_at_end() {
        match scan(&mut branch, trivia) {
            Some(token) => tokens.push(token),
            None => {
                let error = TokenizeError {
                    position: branch.position(),
                    offset: branch.offset(),
                    found: branch.remaining().chars().next().unwrap_or_default(),
                };
                trace!(%error, "tokenization failed");
                return Err(error);
            }
        }
    }

    branch.commit(cursor);
    Ok(tokens)
}

/// Convenience function to tokenize a whole string, keeping trivia tokens
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, TokenizeError> {
    tokenize_all(&mut Cursor::new(source), Trivia::Keep)
}

fn recognize<'a>(cursor: &mut Cursor<'a>) -> Option<Token<'a>> {
    let remaining = cursor.remaining();
    let mut lexer = Lexeme::lexer(remaining);
    let lexeme = lexer.next()?.ok()?;
    let span = lexer.span();
    debug_assert_eq!(span.start, 0);

    let mut branch = cursor.fork();
    branch.advance(span.end);
    let location = branch.commit(cursor);
    Some(Token::new(lexeme, &remaining[span], location))
}
