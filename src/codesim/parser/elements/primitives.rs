//! Literal parsing
//!
//! String and char literals are scanned by hand once the opening quote is seen:
//! their contents may hold text that is not a token on its own (`"#"`), so they
//! cannot go through the tokenizer.

use crate::codesim::ast::PrimitiveValue;
use crate::codesim::cursor::Cursor;
use crate::codesim::lexer::lexer_impl::closing_quote;
use crate::codesim::lexer::{skip_trivia, Lexeme, Trivia};
use crate::codesim::parser::combinators::{lexeme, lexeme_exact, matching};

impl PrimitiveValue {
    /// Build a literal: string, char, boolean, `null` or number
    pub fn build(cursor: &mut Cursor<'_>) -> Option<Self> {
        quoted(cursor, '"')
            .map(PrimitiveValue::String)
            .or_else(|| quoted(cursor, '\'').map(PrimitiveValue::Char))
            .or_else(|| lexeme(cursor, Lexeme::True).map(|_| PrimitiveValue::Boolean(true)))
            .or_else(|| lexeme(cursor, Lexeme::False).map(|_| PrimitiveValue::Boolean(false)))
            .or_else(|| lexeme(cursor, Lexeme::Null).map(|_| PrimitiveValue::Null))
            .or_else(|| number(cursor))
    }
}

/// Raw contents between `delimiter` and the next unescaped `delimiter` on the same line
///
/// An unterminated literal is left untouched so a failure points at its opening quote.
fn quoted(cursor: &mut Cursor<'_>, delimiter: char) -> Option<String> {
    let mut branch = cursor.fork();
    if !branch.remaining().starts_with(delimiter) {
        return None;
    }
    branch.advance(delimiter.len_utf8());

    let rest = branch.remaining();
    let end = closing_quote(rest, delimiter)?;
    let contents = rest[..end].to_string();
    branch.advance(end + delimiter.len_utf8());
    skip_trivia(&mut branch);
    branch.commit(cursor);
    cursor.mark_reached();
    Some(contents)
}

/// Integer or floating literal, with an optional leading `-` glued to it
fn number(cursor: &mut Cursor<'_>) -> Option<PrimitiveValue> {
    let mut branch = cursor.fork();
    let negative = lexeme_exact(&mut branch, Lexeme::Minus).is_some();
    let token = matching(&mut branch, Trivia::Skip, |token| token.lexeme == Lexeme::Number)?;

    let text = token.text;
    let (digits, suffix) = match text.chars().last() {
        Some(suffix @ ('l' | 'L' | 'f' | 'F' | 'd' | 'D')) => (&text[..text.len() - 1], Some(suffix)),
        _ => (text, None),
    };
    let literal = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };

    let floating =
        matches!(suffix, Some('f' | 'F' | 'd' | 'D')) || digits.contains(['.', 'e', 'E']);
    let value = if floating {
        PrimitiveValue::Double {
            value: literal.parse().ok()?,
            is_double: !matches!(suffix, Some('f' | 'F')),
        }
    } else {
        PrimitiveValue::Integer {
            value: literal.parse().ok()?,
            is_long: matches!(suffix, Some('l' | 'L')),
        }
    };

    branch.commit(cursor);
    Some(value)
}
