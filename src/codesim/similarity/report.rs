//! Comparison report
//!
//! [`SimilarityReport`] is what callers of [`compare`](super::compare) get back:
//! the overall score plus the listing rows for whatever renders the diff.

use serde::Serialize;
use std::fmt;

use super::result::{DiffRow, Similarity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    root: Similarity,
}

/// Coarse classification of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Identical,
    NearDuplicate,
    Distinct,
}

impl SimilarityReport {
    pub fn new(root: Similarity) -> Self {
        Self { root }
    }

    /// Overall similarity in `[0.0, 1.0]`
    pub fn similarity(&self) -> f64 {
        self.root.similarity()
    }

    pub fn percentage(&self) -> u32 {
        self.root.percentage()
    }

    pub fn rows(&self) -> Vec<DiffRow> {
        self.root.rows()
    }

    pub fn root(&self) -> &Similarity {
        &self.root
    }

    /// `NearDuplicate` from `threshold` upwards; only a perfect match is `Identical`
    pub fn verdict(&self, threshold: f64) -> Verdict {
        if self.root.is_identical() {
            Verdict::Identical
        } else if self.similarity() >= threshold {
            Verdict::NearDuplicate
        } else {
            Verdict::Distinct
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Identical => write!(f, "identical"),
            Verdict::NearDuplicate => write!(f, "near duplicate"),
            Verdict::Distinct => write!(f, "distinct"),
        }
    }
}
