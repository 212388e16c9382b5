//! Ordered sequence alignment
//!
//! Weighted longest-common-subsequence over two lists: among all monotone
//! pairings, pick the one with the largest total matched weight. Elements left
//! out of the pairing are gaps and count their full weight as unmatched.

use super::evaluator::Evaluate;
use super::result::Similarity;

/// One step of an alignment, indices into the input lists
#[derive(Debug, Clone, PartialEq)]
pub enum AlignStep {
    Pair {
        left: usize,
        right: usize,
        similarity: Similarity,
    },
    /// Present on the left only
    Removed(usize),
    /// Present on the right only
    Inserted(usize),
}

/// Align `left` against `right`, in order, maximizing matched weight.
///
/// `eval` is called once for every (left, right) pair. Pairs that match
/// nothing are never used; both elements become gaps instead.
pub fn align<A, B, F>(left: &[A], right: &[B], mut eval: F) -> Vec<AlignStep>
where
    F: FnMut(&A, &B) -> Similarity,
{
    let (rows, cols) = (left.len(), right.len());
    let mut pairs: Vec<Vec<Option<Similarity>>> = left
        .iter()
        .map(|a| right.iter().map(|b| Some(eval(a, b))).collect())
        .collect();
    let weight = |pairs: &[Vec<Option<Similarity>>], i: usize, j: usize| {
        pairs[i][j].as_ref().map_or(0, |similarity| similarity.matched)
    };

    // best[i][j]: best matched weight aligning left[..i] with right[..j]
    let mut best = vec![vec![0usize; cols + 1]; rows + 1];
    for i in 1..=rows {
        for j in 1..=cols {
            let diagonal = best[i - 1][j - 1] + weight(&pairs, i - 1, j - 1);
            best[i][j] = diagonal.max(best[i - 1][j]).max(best[i][j - 1]);
        }
    }

    let mut steps = Vec::with_capacity(rows + cols);
    let (mut i, mut j) = (rows, cols);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let w = weight(&pairs, i - 1, j - 1);
            if w > 0 && best[i][j] == best[i - 1][j - 1] + w {
                if let Some(similarity) = pairs[i - 1][j - 1].take() {
                    steps.push(AlignStep::Pair {
                        left: i - 1,
                        right: j - 1,
                        similarity,
                    });
                }
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && best[i][j] == best[i - 1][j] {
            steps.push(AlignStep::Removed(i - 1));
            i -= 1;
        } else {
            steps.push(AlignStep::Inserted(j - 1));
            j -= 1;
        }
    }

    steps.reverse();
    steps
}

/// Compare two ordered lists, folding gaps into the score.
///
/// Only matched pairs appear as children; the weight of skipped elements is
/// counted in the total without a row of its own.
pub fn ordered_eval<T: Evaluate>(label: &str, left: &[T], right: &[T]) -> Similarity {
    let mut children = Vec::new();
    let mut gaps = 0;
    for step in align(left, right, |a, b| a.eval(b)) {
        match step {
            AlignStep::Pair { similarity, .. } => children.push(similarity),
            AlignStep::Removed(index) => gaps += left[index].size(),
            AlignStep::Inserted(index) => gaps += right[index].size(),
        }
    }
    Similarity::add(label, children).with_unmatched(gaps)
}

/// Compare two expression sequences, listing every inserted and removed element
pub fn compare_with_gaps<T: Evaluate>(label: &str, left: &[T], right: &[T]) -> Similarity {
    let children = align(left, right, |a, b| a.eval(b))
        .into_iter()
        .map(|step| match step {
            AlignStep::Pair { similarity, .. } => similarity,
            AlignStep::Removed(index) => Similarity::removed(&left[index]),
            AlignStep::Inserted(index) => Similarity::inserted(&right[index]),
        })
        .collect();
    Similarity::add(label, children)
}
