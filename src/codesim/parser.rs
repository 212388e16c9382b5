//! Parser for codesim
//!
//! Recursive-descent, backtracking parser over a [`Cursor`](crate::codesim::cursor::Cursor).
//!
//! ## Modules
//!
//! - `api` - the `parse` entry point
//! - `combinators` - token matchers, delimiters and repetition helpers
//! - `elements` - one `build` constructor per syntax node type
//! - `error` - [`ParseFailure`]
//!
//! Every builder is transactional: it works on a fork of the caller's cursor
//! and commits only when the whole production matched. A grammar mismatch is
//! `None`, never an error; only the top-level [`parse`] turns leftover input
//! into a [`ParseFailure`].

pub mod api;
pub(crate) mod combinators;
pub mod elements;
pub mod error;


pub use api::parse;
pub use error::ParseFailure;
