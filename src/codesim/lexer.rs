//! Lexer module
//!
//! This module contains the tokenization logic: the closed set of lexemes (see
//! [tokens]) and the cursor-driven recognizer (see [lexer_impl]).
//!
//! Tokens are recognised lazily. A production asks for the next token on its own
//! cursor branch; trivia (whitespace, line feeds, comments) is either returned as
//! tokens or skipped after each token, as the caller asks.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{next_token, skip_trivia, tokenize, tokenize_all, Trivia, TokenizeError};
pub use tokens::{Lexeme, Token, TokenKind};
