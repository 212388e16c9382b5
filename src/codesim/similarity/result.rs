//! Similarity result tree
//!
//! A [`Similarity`] mirrors the shape of the comparison: one node per compared
//! field, with the matched and total weight of everything below it. Children are
//! summed, never averaged, so a large mismatched field weighs in proportion to
//! its size.
//!
//! For any comparison of `a` against `b`:
//!
//! ```text
//! total == size(a) + size(b) - matched
//! ```
//!
//! so identical subtrees score `matched == total == size`, and a subtree with
//! nothing in common scores `0 / (size(a) + size(b))`.

use serde::Serialize;

use crate::codesim::ast::AstNode;
use crate::codesim::sizer::Complexity;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Similarity {
    /// Field or node the result describes
    pub label: String,
    /// Display label of the left node, if this result compares nodes
    pub left: Option<String>,
    /// Display label of the right node, if this result compares nodes
    pub right: Option<String>,
    pub matched: usize,
    pub total: usize,
    pub children: Vec<Similarity>,
}

/// How a row of the side-by-side listing came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowKind {
    /// A node on each side
    Compared,
    /// Only on the left side
    Removed,
    /// Only on the right side
    Inserted,
    /// A field grouping the rows below it
    Group,
}

/// One line of the side-by-side listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    pub depth: usize,
    pub left: String,
    pub percentage: u32,
    pub right: String,
    pub kind: RowKind,
}

impl Similarity {
    fn new(label: impl Into<String>, matched: usize, total: usize) -> Self {
        Self {
            label: label.into(),
            left: None,
            right: None,
            matched,
            total,
            children: Vec::new(),
        }
    }

    /// Combine child results: matched and total weights are summed
    pub fn add(label: impl Into<String>, children: Vec<Similarity>) -> Self {
        let (matched, total) = children.iter().fold((0, 0), |(matched, total), child| {
            (matched + child.matched, total + child.total)
        });
        Self {
            children,
            ..Self::new(label, matched, total)
        }
    }

    /// An equality test worth one unit of weight on each side
    pub fn leaf(label: impl Into<String>, equal: bool) -> Self {
        if equal {
            Self::new(label, 1, 1)
        } else {
            Self::new(label, 0, 2)
        }
    }

    /// Weight on either side that has no counterpart at all
    pub fn unmatched(label: impl Into<String>, weight: usize) -> Self {
        Self::new(label, 0, weight)
    }

    /// Two nodes that cannot be compared: nothing of either is matched
    pub fn mismatch<L, R>(left: &L, right: &R) -> Self
    where
        L: Complexity + AstNode + ?Sized,
        R: Complexity + AstNode + ?Sized,
    {
        Self::new(left.node_type(), 0, left.size() + right.size()).between(left, right)
    }

    /// A node only present on the left
    pub fn removed<T: Complexity + AstNode + ?Sized>(item: &T) -> Self {
        Self {
            left: Some(item.display_label()),
            ..Self::new(item.node_type(), 0, item.size())
        }
    }

    /// A node only present on the right
    pub fn inserted<T: Complexity + AstNode + ?Sized>(item: &T) -> Self {
        Self {
            right: Some(item.display_label()),
            ..Self::new(item.node_type(), 0, item.size())
        }
    }

    /// Attach the compared nodes' labels
    pub fn between<L, R>(mut self, left: &L, right: &R) -> Self
    where
        L: AstNode + ?Sized,
        R: AstNode + ?Sized,
    {
        self.left = Some(left.display_label());
        self.right = Some(right.display_label());
        self
    }

    /// Count extra unmatched weight without listing it as a row
    pub fn with_unmatched(mut self, weight: usize) -> Self {
        self.total += weight;
        self
    }

    /// `matched / total`; two empty things are a perfect match
    pub fn similarity(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.matched as f64 / self.total as f64
        }
    }

    /// Similarity as a whole percentage. Only a perfect match reaches 100.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            100
        } else {
            (self.matched * 100 / self.total) as u32
        }
    }

    pub fn is_identical(&self) -> bool {
        self.matched == self.total
    }

    pub fn kind(&self) -> RowKind {
        match (&self.left, &self.right) {
            (Some(_), Some(_)) => RowKind::Compared,
            (Some(_), None) => RowKind::Removed,
            (None, Some(_)) => RowKind::Inserted,
            (None, None) => RowKind::Group,
        }
    }

    /// Flatten the tree into listing rows, depth first.
    ///
    /// Results that carry no weight (an empty qualifier list, two empty bodies)
    /// produce no row.
    pub fn rows(&self) -> Vec<DiffRow> {
        let mut rows = Vec::new();
        self.collect_rows(0, &mut rows);
        rows
    }

    fn collect_rows(&self, depth: usize, rows: &mut Vec<DiffRow>) {
        let kind = self.kind();
        let (left, right) = match kind {
            RowKind::Group => (self.label.clone(), self.label.clone()),
            _ => (
                self.left.clone().unwrap_or_default(),
                self.right.clone().unwrap_or_default(),
            ),
        };
        rows.push(DiffRow {
            depth,
            left,
            percentage: self.percentage(),
            right,
            kind,
        });

        for child in self.children.iter().filter(|child| child.total > 0) {
            child.collect_rows(depth + 1, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codesim::ast::Statement;

    #[test]
    fn test_empty_comparison_is_perfect() {
        let empty = Similarity::add("file", vec![]);
        assert_eq!(empty.similarity(), 1.0);
        assert_eq!(empty.percentage(), 100);
    }

    #[test]
    fn test_add_sums_weights() {
        let combined = Similarity::add(
            "declaration",
            vec![
                Similarity::leaf("name", true),
                Similarity::leaf("type", false),
                Similarity::unmatched("initializer", 3),
            ],
        );
        assert_eq!((combined.matched, combined.total), (1, 6));
        assert_eq!(combined.percentage(), 16);
        assert!(!combined.is_identical());
    }

    #[test]
    fn test_mismatch_counts_both_sides() {
        let left = Statement::variable("a");
        let right = Statement::ParameterPassing(crate::codesim::ast::ParameterPassing {
            parameters: vec![Statement::variable("b")],
        });
        let result = Similarity::mismatch(&left, &right);

        assert_eq!((result.matched, result.total), (0, 3));
        assert_eq!(result.kind(), RowKind::Compared);
        assert_eq!(result.left.as_deref(), Some("a"));
        assert_eq!(result.right.as_deref(), Some("(b)"));
    }

    #[test]
    fn test_rows() {
        let left = Statement::variable("a");
        let tree = Similarity::add(
            "body",
            vec![
                Similarity::leaf("keyword", true),
                Similarity::removed(&left),
                Similarity::add("qualifiers", vec![]),
            ],
        );
        let rows = tree.rows();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kind, RowKind::Group);
        assert_eq!(rows[0].left, "body");
        assert_eq!(rows[0].percentage, 50);
        assert_eq!(rows[2].depth, 1);
        assert_eq!(rows[2].kind, RowKind::Removed);
        assert_eq!(rows[2].left, "a");
        assert_eq!(rows[2].right, "");
        assert_eq!(rows[2].percentage, 0);
    }
}
