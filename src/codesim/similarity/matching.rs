//! Unordered matching
//!
//! Qualifiers and multi-catch exception types are sets: `final static` and
//! `static final` are the same thing. They are compared through the assignment
//! that maximizes total matched weight (Hungarian algorithm, `O(n² m)`).

use super::evaluator::Evaluate;
use super::result::Similarity;

/// Compare two unordered lists through their best one-to-one assignment.
///
/// Elements left without a partner, or paired with something they match
/// nothing of, count their full weight as unmatched.
pub fn maximum_match<T: Evaluate>(label: &str, left: &[T], right: &[T]) -> Similarity {
    let mut pairs: Vec<Vec<Option<Similarity>>> = left
        .iter()
        .map(|a| right.iter().map(|b| Some(a.eval(b))).collect())
        .collect();
    let weights: Vec<Vec<usize>> = pairs
        .iter()
        .map(|row| {
            row.iter()
                .map(|pair| pair.as_ref().map_or(0, |similarity| similarity.matched))
                .collect()
        })
        .collect();

    let mut left_used = vec![false; left.len()];
    let mut right_used = vec![false; right.len()];
    let mut children = Vec::new();
    for (i, j) in best_assignment(&weights) {
        if weights[i][j] == 0 {
            continue;
        }
        if let Some(similarity) = pairs[i][j].take() {
            left_used[i] = true;
            right_used[j] = true;
            children.push(similarity);
        }
    }

    let unpaired = |items: &[T], used: &[bool]| -> usize {
        items
            .iter()
            .zip(used)
            .filter(|(_, used)| !**used)
            .map(|(item, _)| item.size())
            .sum()
    };
    let gaps = unpaired(left, &left_used) + unpaired(right, &right_used);
    Similarity::add(label, children).with_unmatched(gaps)
}

/// Maximum-weight assignment between rows and columns of `weights`.
///
/// Returns `(row, column)` pairs sorted by row; every row is assigned when there
/// are at least as many columns as rows, and every column otherwise.
pub(crate) fn best_assignment(weights: &[Vec<usize>]) -> Vec<(usize, usize)> {
    let rows = weights.len();
    let cols = weights.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    if rows > cols {
        let transposed: Vec<Vec<usize>> = (0..cols)
            .map(|j| (0..rows).map(|i| weights[i][j]).collect())
            .collect();
        let mut assignment: Vec<(usize, usize)> = best_assignment(&transposed)
            .into_iter()
            .map(|(j, i)| (i, j))
            .collect();
        assignment.sort_unstable();
        return assignment;
    }

    // Minimum-cost formulation on negated weights, 1-based with a virtual
    // column 0. `owner[j]` is the row currently assigned to column `j`.
    let cost = |i: usize, j: usize| -(weights[i - 1][j - 1] as i64);
    let mut row_potential = vec![0i64; rows + 1];
    let mut col_potential = vec![0i64; cols + 1];
    let mut owner = vec![0usize; cols + 1];
    let mut previous = vec![0usize; cols + 1];

    for row in 1..=rows {
        owner[0] = row;
        let mut col = 0;
        let mut slack = vec![i64::MAX; cols + 1];
        let mut visited = vec![false; cols + 1];

        loop {
            visited[col] = true;
            let current = owner[col];
            let mut delta = i64::MAX;
            let mut next = 0;
            for j in 1..=cols {
                if visited[j] {
                    continue;
                }
                let reduced = cost(current, j) - row_potential[current] - col_potential[j];
                if reduced < slack[j] {
                    slack[j] = reduced;
                    previous[j] = col;
                }
                if slack[j] < delta {
                    delta = slack[j];
                    next = j;
                }
            }
            for j in 0..=cols {
                if visited[j] {
                    row_potential[owner[j]] += delta;
                    col_potential[j] -= delta;
                } else {
                    slack[j] -= delta;
                }
            }
            col = next;
            if owner[col] == 0 {
                break;
            }
        }

        // Flip the augmenting path back to the virtual column
        while col != 0 {
            let prior = previous[col];
            owner[col] = owner[prior];
            col = prior;
        }
    }

    let mut assignment: Vec<(usize, usize)> = (1..=cols)
        .filter(|&j| owner[j] != 0)
        .map(|j| (owner[j] - 1, j - 1))
        .collect();
    assignment.sort_unstable();
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codesim::ast::Qualifier;
    use proptest::prelude::*;

    fn total(weights: &[Vec<usize>], assignment: &[(usize, usize)]) -> usize {
        assignment.iter().map(|&(i, j)| weights[i][j]).sum()
    }

    /// Best total over every injective map from rows to columns
    fn brute_force(weights: &[Vec<usize>], row: usize, used: &mut Vec<bool>) -> usize {
        if row == weights.len() {
            return 0;
        }
        let mut best = 0;
        for col in 0..used.len() {
            if used[col] {
                continue;
            }
            used[col] = true;
            best = best.max(weights[row][col] + brute_force(weights, row + 1, used));
            used[col] = false;
        }
        best
    }

    fn brute_force_best(weights: &[Vec<usize>]) -> usize {
        let rows = weights.len();
        let cols = weights.first().map_or(0, Vec::len);
        if rows <= cols {
            brute_force(weights, 0, &mut vec![false; cols])
        } else {
            let transposed: Vec<Vec<usize>> = (0..cols)
                .map(|j| (0..rows).map(|i| weights[i][j]).collect())
                .collect();
            brute_force(&transposed, 0, &mut vec![false; rows])
        }
    }

    #[test]
    fn test_assignment_prefers_total_over_greedy() {
        // Greedy would take (0, 0) = 5 and be left with (1, 1) = 0
        let weights = vec![vec![5, 4], vec![4, 0]];
        let assignment = best_assignment(&weights);

        assert_eq!(assignment, vec![(0, 1), (1, 0)]);
        assert_eq!(total(&weights, &assignment), 8);
    }

    #[test]
    fn test_assignment_with_more_rows() {
        let weights = vec![vec![1], vec![3], vec![2]];
        assert_eq!(best_assignment(&weights), vec![(1, 0)]);
    }

    #[test]
    fn test_empty_assignment() {
        assert!(best_assignment(&[]).is_empty());
        assert!(best_assignment(&[vec![], vec![]]).is_empty());
    }

    #[test]
    fn test_qualifier_order_does_not_matter() {
        let left = vec![Qualifier::Final, Qualifier::Static];
        let right = vec![Qualifier::Static, Qualifier::Final];
        let result = maximum_match("qualifiers", &left, &right);

        assert_eq!((result.matched, result.total), (2, 2));
    }

    #[test]
    fn test_unpaired_elements_cost_their_weight() {
        let left = vec![Qualifier::Public, Qualifier::Static];
        let right = vec![Qualifier::Static];
        let result = maximum_match("qualifiers", &left, &right);

        assert_eq!((result.matched, result.total), (1, 2));
        assert_eq!(result.children.len(), 1);
    }

    #[test]
    fn test_nothing_in_common() {
        let left = vec![Qualifier::Public];
        let right = vec![Qualifier::Private, Qualifier::Final];
        let result = maximum_match("qualifiers", &left, &right);

        assert_eq!((result.matched, result.total), (0, 3));
        assert!(result.children.is_empty());
    }

    fn weights() -> impl Strategy<Value = Vec<Vec<usize>>> {
        (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(0usize..10, cols), rows)
        })
    }

    proptest! {
        #[test]
        fn prop_assignment_is_optimal(weights in weights()) {
            let assignment = best_assignment(&weights);
            let rows = weights.len();
            let cols = weights[0].len();

            prop_assert_eq!(assignment.len(), rows.min(cols));
            prop_assert_eq!(total(&weights, &assignment), brute_force_best(&weights));
        }

        #[test]
        fn prop_assignment_is_one_to_one(weights in weights()) {
            let assignment = best_assignment(&weights);
            let mut rows: Vec<usize> = assignment.iter().map(|&(i, _)| i).collect();
            let mut cols: Vec<usize> = assignment.iter().map(|&(_, j)| j).collect();
            rows.dedup();
            cols.sort_unstable();
            cols.dedup();

            prop_assert_eq!(rows.len(), assignment.len());
            prop_assert_eq!(cols.len(), assignment.len());
        }
    }
}
