//! Output formats
//!
//! - `registry` - [`Formatter`] trait and [`FormatRegistry`] for syntax trees
//! - `treeviz` - indented tree listing used by `codesim show`
//! - `table` - side-by-side diff table for a [`SimilarityReport`](crate::codesim::similarity::SimilarityReport)

pub mod registry;
pub mod table;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use table::{render_table, TableStyle};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
