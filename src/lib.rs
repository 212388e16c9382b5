//! # codesim
//!
//! Structural similarity between source files written in a small Java-like
//! language.
//!
//! Both inputs are parsed into a [`SyntaxTree`](codesim::ast::SyntaxTree) and
//! compared node by node. Every node has a weight (see [`codesim::sizer`]); the
//! result is the share of total weight the two trees have in common, along with
//! an aligned listing of what matched, what changed and what is missing on
//! either side.
//!
//! ```rust,ignore
//! use codesim::{compare, parse};
//!
//! let left = parse("int x = 0; while (x != 10) { x = x + 1; }")?;
//! let right = parse("int y = 0; while (y != 10) { y = y + 1; }")?;
//! let report = compare(&left, &right);
//! println!("{}%", report.percentage());
//! ```

pub mod codesim;

pub use codesim::parser::{parse, ParseFailure};
pub use codesim::similarity::{compare, SimilarityReport};
