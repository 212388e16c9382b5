//! Structural similarity between syntax trees
//!
//! ## Modules
//!
//! - `evaluator` - the [`Evaluate`] trait and its per-node implementations
//! - `sequence` - ordered alignment (`ordered_eval`, `compare_with_gaps`)
//! - `matching` - unordered best assignment (`maximum_match`)
//! - `result` - the [`Similarity`] tree and its listing rows
//! - `report` - [`SimilarityReport`], the result of [`compare`]
//!
//! Scores are symmetric (`compare(a, b)` and `compare(b, a)` give the same
//! similarity) and reflexive (a tree compared with itself scores 1.0).

pub mod evaluator;
pub mod matching;
pub mod report;
pub mod result;
pub mod sequence;

pub use evaluator::Evaluate;
pub use matching::maximum_match;
pub use report::{SimilarityReport, Verdict};
pub use result::{DiffRow, RowKind, Similarity};
pub use sequence::{align, compare_with_gaps, ordered_eval, AlignStep};

use tracing::debug;

use crate::codesim::ast::SyntaxTree;

/// Compare two whole trees; top-level expressions are aligned in order
pub fn compare(left: &SyntaxTree, right: &SyntaxTree) -> SimilarityReport {
    let root = compare_with_gaps("file", &left.expressions, &right.expressions);
    debug!(
        matched = root.matched,
        total = root.total,
        "compared {} against {} expressions",
        left.expressions.len(),
        right.expressions.len()
    );
    SimilarityReport::new(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codesim::parser::parse;

    fn tree(source: &str) -> SyntaxTree {
        parse(source).expect("valid source")
    }

    #[test]
    fn test_compare_identical_files() {
        let source = "int x = 0;\nwhile (x != 10) { x = x + 1; }\n";
        let report = compare(&tree(source), &tree(source));

        assert_eq!(report.similarity(), 1.0);
        assert_eq!(report.percentage(), 100);
        assert_eq!(report.verdict(0.7), Verdict::Identical);
    }

    #[test]
    fn test_compare_empty_files() {
        let report = compare(&tree(""), &tree("// nothing here\n"));
        assert_eq!(report.similarity(), 1.0);
    }

    #[test]
    fn test_compare_against_empty_file() {
        let report = compare(&tree("x = 1;"), &tree(""));
        assert_eq!(report.similarity(), 0.0);
        assert_eq!(report.rows()[1].kind, RowKind::Removed);
    }

    #[test]
    fn test_rows_mirror_the_alignment() {
        let report = compare(&tree("a; b;"), &tree("a; c; b;"));
        let rows: Vec<String> = report
            .rows()
            .iter()
            .map(|row| format!("{}|{}|{}|{}", row.depth, row.left, row.percentage, row.right))
            .collect();

        assert_eq!(rows, vec!["0|file|66|file", "1|a|100|a", "1||0|c", "1|b|100|b"]);
    }
}
