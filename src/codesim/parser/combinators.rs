//! Small building blocks shared by the element builders.
//!
//! Every helper here follows the same contract as the builders themselves: on
//! success it commits into the cursor it was given, on failure it returns `None`
//! and the cursor has not moved. Delimiter and keyword matchers also consume the
//! whitespace and comments that follow them.

use crate::codesim::cursor::Cursor;
use crate::codesim::lexer::{next_token, Lexeme, Token, Trivia};

/// Consume the next token if it is `expected`, plus trailing trivia
pub(crate) fn lexeme<'a>(cursor: &mut Cursor<'a>, expected: Lexeme) -> Option<Token<'a>> {
    matching(cursor, Trivia::Skip, |token| token.lexeme == expected)
}

/// Consume the next token if it is `expected`, leaving whatever follows it
pub(crate) fn lexeme_exact<'a>(cursor: &mut Cursor<'a>, expected: Lexeme) -> Option<Token<'a>> {
    matching(cursor, Trivia::Keep, |token| token.lexeme == expected)
}

/// Consume the next token if `accept` approves it
pub(crate) fn matching<'a>(
    cursor: &mut Cursor<'a>,
    trivia: Trivia,
    accept: impl FnOnce(&Token<'a>) -> bool,
) -> Option<Token<'a>> {
    let mut branch = cursor.fork();
    let token = next_token(&mut branch, trivia)?;
    if !accept(&token) {
        return None;
    }
    branch.commit(cursor);
    cursor.mark_reached();
    Some(token)
}

/// An identifier (keywords never match)
pub(crate) fn word<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    lexeme(cursor, Lexeme::Word).map(|token| token.text)
}

/// `a.b.c`
pub(crate) fn dotted_name(cursor: &mut Cursor<'_>) -> Option<String> {
    let mut branch = cursor.fork();
    let mut name = word(&mut branch)?.to_string();
    loop {
        let mut step = branch.fork();
        let Some(_) = lexeme(&mut step, Lexeme::Dot) else {
            break;
        };
        let Some(part) = word(&mut step) else {
            break;
        };
        name.push('.');
        name.push_str(part);
        step.commit(&mut branch);
    }
    branch.commit(cursor);
    Some(name)
}

pub(crate) fn semicolon(cursor: &mut Cursor<'_>) -> Option<()> {
    lexeme(cursor, Lexeme::Semicolon).map(|_| ())
}

pub(crate) fn open_paren(cursor: &mut Cursor<'_>) -> Option<()> {
    lexeme(cursor, Lexeme::OpenParen).map(|_| ())
}

pub(crate) fn close_paren(cursor: &mut Cursor<'_>) -> Option<()> {
    lexeme(cursor, Lexeme::CloseParen).map(|_| ())
}

pub(crate) fn open_brace(cursor: &mut Cursor<'_>) -> Option<()> {
    lexeme(cursor, Lexeme::OpenBrace).map(|_| ())
}

pub(crate) fn close_brace(cursor: &mut Cursor<'_>) -> Option<()> {
    lexeme(cursor, Lexeme::CloseBrace).map(|_| ())
}

pub(crate) fn open_bracket(cursor: &mut Cursor<'_>) -> Option<()> {
    lexeme(cursor, Lexeme::OpenBracket).map(|_| ())
}

pub(crate) fn close_bracket(cursor: &mut Cursor<'_>) -> Option<()> {
    lexeme(cursor, Lexeme::CloseBracket).map(|_| ())
}

pub(crate) fn open_chevron(cursor: &mut Cursor<'_>) -> Option<()> {
    lexeme(cursor, Lexeme::OpenChevron).map(|_| ())
}

pub(crate) fn close_chevron(cursor: &mut Cursor<'_>) -> Option<()> {
    lexeme(cursor, Lexeme::CloseChevron).map(|_| ())
}

/// `open inner close`, all or nothing
pub(crate) fn delimited<'a, T>(
    cursor: &mut Cursor<'a>,
    open: fn(&mut Cursor<'a>) -> Option<()>,
    close: fn(&mut Cursor<'a>) -> Option<()>,
    inner: impl FnOnce(&mut Cursor<'a>) -> Option<T>,
) -> Option<T> {
    let mut branch = cursor.fork();
    open(&mut branch)?;
    let value = inner(&mut branch)?;
    close(&mut branch)?;
    branch.commit(cursor);
    Some(value)
}

/// Zero or more `item`s, stopping at the first one that does not match
pub(crate) fn repeated<'a, T>(
    cursor: &mut Cursor<'a>,
    mut item: impl FnMut(&mut Cursor<'a>) -> Option<T>,
) -> Vec<T> {
    let mut items = Vec::new();
    loop {
        let before = cursor.offset();
        match item(cursor) {
            // An item that matched without consuming anything would repeat forever
            Some(value) if cursor.offset() > before => items.push(value),
            _ => break,
        }
    }
    items
}

/// One or more `item`s separated by `separator`
pub(crate) fn separated<'a, T>(
    cursor: &mut Cursor<'a>,
    separator: Lexeme,
    mut item: impl FnMut(&mut Cursor<'a>) -> Option<T>,
) -> Option<Vec<T>> {
    let mut branch = cursor.fork();
    let mut items = vec![item(&mut branch)?];
    loop {
        let mut step = branch.fork();
        if lexeme(&mut step, separator).is_none() {
            break;
        }
        let Some(value) = item(&mut step) else {
            break;
        };
        items.push(value);
        step.commit(&mut branch);
    }
    branch.commit(cursor);
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexeme_skips_trailing_trivia() {
        let mut cursor = Cursor::new("( /* note */ x");
        assert!(open_paren(&mut cursor).is_some());
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn test_lexeme_exact_keeps_trailing_text() {
        let mut cursor = Cursor::new("\" x\"");
        assert!(lexeme_exact(&mut cursor, Lexeme::DoubleQuote).is_some());
        assert_eq!(cursor.remaining(), " x\"");
    }

    #[test]
    fn test_mismatch_leaves_cursor() {
        let mut cursor = Cursor::new("x)");
        assert!(open_paren(&mut cursor).is_none());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_dotted_name() {
        let mut cursor = Cursor::new("java.util.List x");
        assert_eq!(dotted_name(&mut cursor).as_deref(), Some("java.util.List"));
        assert_eq!(cursor.remaining(), "x");

        // A trailing dot is not part of the name
        let mut cursor = Cursor::new("a. ;");
        assert_eq!(dotted_name(&mut cursor).as_deref(), Some("a"));
        assert_eq!(cursor.remaining(), ". ;");
    }

    #[test]
    fn test_delimited_is_all_or_nothing() {
        let mut cursor = Cursor::new("(a b");
        assert!(delimited(&mut cursor, open_paren, close_paren, word).is_none());
        assert_eq!(cursor.offset(), 0);

        let mut cursor = Cursor::new("( a ) b");
        assert_eq!(delimited(&mut cursor, open_paren, close_paren, word), Some("a"));
        assert_eq!(cursor.remaining(), "b");
    }

    #[test]
    fn test_separated_leaves_dangling_separator() {
        let mut cursor = Cursor::new("a, b, ;");
        let items = separated(&mut cursor, Lexeme::Comma, word).expect("two words");
        assert_eq!(items, vec!["a", "b"]);
        assert_eq!(cursor.remaining(), ", ;");
    }

    #[test]
    fn test_repeated() {
        let mut cursor = Cursor::new("a b c ;");
        assert_eq!(repeated(&mut cursor, word), vec!["a", "b", "c"]);
        assert_eq!(cursor.remaining(), ";");
    }
}
