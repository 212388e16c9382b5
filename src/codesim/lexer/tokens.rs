//! Token definitions
//!
//! [`Lexeme`] is the closed set of things the tokenizer recognises, derived with
//! logos. Every lexeme belongs to one of the coarse [`TokenKind`]s.
//!
//! Recognition order matters and is expressed through logos' matching rules:
//! the longest match wins, so `++` beats `+`, `/*` beats `/` and `classify` is a
//! word rather than the keyword `class` followed by `ify`. When a keyword and the
//! identifier pattern match the same text, the literal keyword token has the
//! higher priority.
use logos::Logos;
use serde::Serialize;
use std::fmt;

use crate::codesim::location::Location;

/// Coarse token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Word,
    Number,
    Symbol,
    Whitespace,
    LineFeed,
    /// A whole `//` or `/* */` comment, only produced by batch tokenization
    Comment,
    /// A whole string or char literal, only produced by batch tokenization
    Text,
}

/// All lexemes the tokenizer can produce
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lexeme {
    // Trivia
    #[regex(r"[ \t\r\x0C]+")]
    Whitespace,
    #[token("\n")]
    LineFeed,

    // Multi-character symbols
    #[token("++")]
    Increment,
    #[token("--")]
    Decrement,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("//")]
    LineComment,
    #[token("/*")]
    BlockCommentOpen,
    #[token("*/")]
    BlockCommentClose,

    // Single-character symbols
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("=")]
    Assign,
    #[token("!")]
    Bang,
    #[token("<")]
    OpenChevron,
    #[token(">")]
    CloseChevron,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("&")]
    Ampersand,
    #[token("|")]
    Pipe,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("@")]
    At,
    #[token("\"")]
    DoubleQuote,
    #[token("'")]
    SingleQuote,
    #[token("\\")]
    Backslash,

    // Keywords
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("for")]
    For,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("finally")]
    Finally,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[token("class")]
    Class,
    #[token("final")]
    Final,
    #[token("static")]
    Static,
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("private")]
    Private,
    #[token("transient")]
    Transient,
    #[token("volatile")]
    Volatile,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?[lLfFdD]?")]
    Number,

    // Identifiers (catch-all for words that are not keywords)
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Word,
}

impl Lexeme {
    pub fn kind(&self) -> TokenKind {
        match self {
            Lexeme::Whitespace => TokenKind::Whitespace,
            Lexeme::LineFeed => TokenKind::LineFeed,
            Lexeme::Number => TokenKind::Number,
            Lexeme::Word => TokenKind::Word,
            other if other.is_comment() => TokenKind::Comment,
            other if other.is_keyword() => TokenKind::Word,
            _ => TokenKind::Symbol,
        }
    }

    /// Check if this lexeme is whitespace or a line feed
    pub fn is_trivia(&self) -> bool {
        matches!(self, Lexeme::Whitespace | Lexeme::LineFeed)
    }

    /// Check if this lexeme opens a comment
    pub fn is_comment(&self) -> bool {
        matches!(self, Lexeme::LineComment | Lexeme::BlockCommentOpen)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Lexeme::If
                | Lexeme::Else
                | Lexeme::While
                | Lexeme::Do
                | Lexeme::For
                | Lexeme::Try
                | Lexeme::Catch
                | Lexeme::Finally
                | Lexeme::True
                | Lexeme::False
                | Lexeme::Null
                | Lexeme::Class
        ) || self.is_qualifier()
    }

    /// Check if this lexeme is a declaration modifier
    pub fn is_qualifier(&self) -> bool {
        matches!(
            self,
            Lexeme::Final
                | Lexeme::Static
                | Lexeme::Public
                | Lexeme::Protected
                | Lexeme::Private
                | Lexeme::Transient
                | Lexeme::Volatile
        )
    }
}

/// A recognised token: its lexeme, the raw text and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: Lexeme,
    pub text: &'a str,
    pub location: Location,
}

impl<'a> Token<'a> {
    pub fn new(lexeme: Lexeme, text: &'a str, location: Location) -> Self {
        Self {
            kind: lexeme.kind(),
            lexeme,
            text,
            location,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(source: &str) -> Vec<Lexeme> {
        Lexeme::lexer(source).filter_map(|result| result.ok()).collect()
    }

    #[test]
    fn test_multi_character_symbols_win() {
        assert_eq!(lexemes("++"), vec![Lexeme::Increment]);
        assert_eq!(lexemes("+ +"), vec![Lexeme::Plus, Lexeme::Whitespace, Lexeme::Plus]);
        assert_eq!(lexemes("/*"), vec![Lexeme::BlockCommentOpen]);
        assert_eq!(lexemes("//"), vec![Lexeme::LineComment]);
        assert_eq!(lexemes("=="), vec![Lexeme::EqualEqual]);
        assert_eq!(lexemes("!="), vec![Lexeme::NotEqual]);
        assert_eq!(lexemes("!"), vec![Lexeme::Bang]);
    }

    #[test]
    fn test_keywords_need_word_boundary() {
        assert_eq!(lexemes("class"), vec![Lexeme::Class]);
        assert_eq!(lexemes("classify"), vec![Lexeme::Word]);
        assert_eq!(lexemes("if"), vec![Lexeme::If]);
        assert_eq!(lexemes("iffy"), vec![Lexeme::Word]);
        assert_eq!(lexemes("finally"), vec![Lexeme::Finally]);
        assert_eq!(lexemes("final"), vec![Lexeme::Final]);
        assert_eq!(lexemes("finalize"), vec![Lexeme::Word]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(lexemes("42"), vec![Lexeme::Number]);
        assert_eq!(lexemes("42L"), vec![Lexeme::Number]);
        assert_eq!(lexemes("3.14"), vec![Lexeme::Number]);
        assert_eq!(lexemes("2.5f"), vec![Lexeme::Number]);
        assert_eq!(lexemes("1e10"), vec![Lexeme::Number]);
    }

    #[test]
    fn test_trivia() {
        assert_eq!(
            lexemes("a \t b\nc"),
            vec![
                Lexeme::Word,
                Lexeme::Whitespace,
                Lexeme::Word,
                Lexeme::LineFeed,
                Lexeme::Word
            ]
        );
    }

    #[test]
    fn test_lexeme_kinds() {
        assert_eq!(Lexeme::Word.kind(), TokenKind::Word);
        assert_eq!(Lexeme::While.kind(), TokenKind::Word);
        assert_eq!(Lexeme::Final.kind(), TokenKind::Word);
        assert_eq!(Lexeme::Number.kind(), TokenKind::Number);
        assert_eq!(Lexeme::Increment.kind(), TokenKind::Symbol);
        assert_eq!(Lexeme::Whitespace.kind(), TokenKind::Whitespace);
        assert_eq!(Lexeme::LineFeed.kind(), TokenKind::LineFeed);
        assert_eq!(Lexeme::LineComment.kind(), TokenKind::Comment);
    }

    #[test]
    fn test_lexeme_predicates() {
        assert!(Lexeme::Whitespace.is_trivia());
        assert!(Lexeme::LineFeed.is_trivia());
        assert!(!Lexeme::Word.is_trivia());

        assert!(Lexeme::LineComment.is_comment());
        assert!(Lexeme::BlockCommentOpen.is_comment());
        assert!(!Lexeme::Slash.is_comment());

        assert!(Lexeme::Volatile.is_qualifier());
        assert!(!Lexeme::While.is_qualifier());
        assert!(Lexeme::Null.is_keyword());
        assert!(!Lexeme::Word.is_keyword());
    }
}
