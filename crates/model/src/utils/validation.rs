//! Deterministic data splitting
//!
//! Reproducible shuffles and index partitions used by both the train/test
//! split and the k-fold cross-validation harness. Same seed and input
//! always produce byte-identical splits.

use crate::utils::rng::Lcg;

/// Shuffled indices `0..n` for the given seed
pub fn shuffled_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    Lcg::new(seed).shuffle(&mut indices);
    indices
}

/// Reproducible train/test index split
///
/// Shuffles `0..n` with a seeded [`Lcg`], then takes the first
/// `floor(n * test_fraction)` indices as the test set and the rest as the
/// training set. The two sets always partition `0..n` exactly.
pub fn train_test_split_indices(
    n: usize,
    test_fraction: f64,
    seed: u64,
) -> (Vec<usize>, Vec<usize>) {
    let indices = shuffled_indices(n, seed);
    let test_size = (n as f64 * test_fraction).floor() as usize;
    let test = indices[..test_size].to_vec();
    let train = indices[test_size..].to_vec();
    (train, test)
}

/// Contiguous k-fold partition of shuffled indices
///
/// Each fold has `floor(n / k)` indices; the last fold absorbs the
/// remainder. Always returns exactly `k` folds.
pub fn k_fold_indices(n: usize, k: usize, seed: u64) -> Vec<Vec<usize>> {
    let indices = shuffled_indices(n, seed);
    let fold_size = n / k.max(1);

    (0..k)
        .map(|fold| {
            let start = fold * fold_size;
            let end = if fold == k - 1 { n } else { start + fold_size };
            indices[start.min(n)..end.min(n)].to_vec()
        })
        .collect()
}

/// Gather the rows of `x` and entries of `y` at the given indices
pub fn take_rows(x: &[Vec<f64>], y: &[f64], indices: &[usize]) -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = indices.iter().map(|&i| x[i].clone()).collect();
    let ys = indices.iter().map(|&i| y[i]).collect();
    (xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_split_partitions_exactly() {
        for n in [0, 1, 7, 20, 101] {
            let (train, test) = train_test_split_indices(n, 0.3, 42);
            assert_eq!(train.len() + test.len(), n);

            let all: HashSet<usize> = train.iter().chain(test.iter()).copied().collect();
            assert_eq!(all.len(), n);
            assert!(all.iter().all(|&i| i < n));
        }
    }

    #[test]
    fn test_split_size_uses_floor() {
        let (train, test) = train_test_split_indices(10, 0.25, 1);
        assert_eq!(test.len(), 2); // floor(10 * 0.25)
        assert_eq!(train.len(), 8);
    }

    #[test]
    fn test_split_deterministic() {
        let a = train_test_split_indices(50, 0.2, 1234);
        let b = train_test_split_indices(50, 0.2, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_seed_changes_result() {
        let a = train_test_split_indices(50, 0.2, 1);
        let b = train_test_split_indices(50, 0.2, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_k_fold_count_always_k() {
        for n in [10, 11, 23, 100] {
            for k in [2, 3, 5] {
                let folds = k_fold_indices(n, k, 7);
                assert_eq!(folds.len(), k);
                let total: usize = folds.iter().map(|f| f.len()).sum();
                assert_eq!(total, n);
            }
        }
    }

    #[test]
    fn test_k_fold_last_absorbs_remainder() {
        let folds = k_fold_indices(11, 3, 7);
        assert_eq!(folds[0].len(), 3);
        assert_eq!(folds[1].len(), 3);
        assert_eq!(folds[2].len(), 5);
    }

    #[test]
    fn test_k_fold_disjoint() {
        let folds = k_fold_indices(30, 4, 99);
        let all: Vec<usize> = folds.iter().flatten().copied().collect();
        let unique: HashSet<usize> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn test_take_rows() {
        let x = vec![vec![1.0], vec![2.0], vec![3.0]];
        let y = vec![10.0, 20.0, 30.0];
        let (xs, ys) = take_rows(&x, &y, &[2, 0]);
        assert_eq!(xs, vec![vec![3.0], vec![1.0]]);
        assert_eq!(ys, vec![30.0, 10.0]);
    }
}
