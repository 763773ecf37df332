//! Seeded linear-congruential randomness
//!
//! Every stochastic step in the engine (shuffles, bootstrap resampling,
//! feature-subset selection) draws from an explicitly constructed [`Lcg`],
//! never from process-wide state. Same seed, same sequence.

/// Seeded linear-congruential generator
///
/// Uses the recurrence `seed = (seed * 9301 + 49297) mod 233280`. The
/// period is short, which is acceptable here: the generator exists for
/// reproducible shuffling and sampling, not for statistical quality.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    const MULTIPLIER: u64 = 9301;
    const INCREMENT: u64 = 49297;
    const MODULUS: u64 = 233280;

    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % Self::MODULUS,
        }
    }

    /// Derive an independently seeded generator for a parallel worker
    ///
    /// Streams with distinct ids produce distinct, reproducible sequences.
    pub fn fork(&self, stream: u64) -> Self {
        Self::new(self.state.wrapping_add(stream.wrapping_mul(7919)))
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }

    /// Uniform integer in `[0, bound)`
    ///
    /// Returns 0 when `bound` is 0.
    pub fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let idx = (self.next_f64() * bound as f64) as usize;
        idx.min(bound - 1)
    }

    /// In-place Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }

    /// Sample `k` distinct indices from `[0, n)`
    ///
    /// Returns all of `[0, n)` when `k >= n`. Result is sorted so callers
    /// get a stable column order.
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();
        if k >= n {
            return indices;
        }
        self.shuffle(&mut indices);
        indices.truncate(k);
        indices.sort_unstable();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Lcg::new(42);
        let mut b = Lcg::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Lcg::new(1);
        let mut b = Lcg::new(2);
        let seq_a: Vec<f64> = (0..10).map(|_| a.next_f64()).collect();
        let seq_b: Vec<f64> = (0..10).map(|_| b.next_f64()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut rng = Lcg::new(7);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_next_index_bounds() {
        let mut rng = Lcg::new(3);
        for _ in 0..1000 {
            assert!(rng.next_index(5) < 5);
        }
        assert_eq!(rng.next_index(0), 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = Lcg::new(9);
        let mut items: Vec<usize> = (0..50).collect();
        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a: Vec<usize> = (0..20).collect();
        let mut b: Vec<usize> = (0..20).collect();
        Lcg::new(11).shuffle(&mut a);
        Lcg::new(11).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_indices_distinct_and_sorted() {
        let mut rng = Lcg::new(5);
        let sample = rng.sample_indices(10, 3);
        assert_eq!(sample.len(), 3);
        assert!(sample.windows(2).all(|w| w[0] < w[1]));
        assert!(sample.iter().all(|&i| i < 10));
    }

    #[test]
    fn test_sample_indices_k_exceeds_n() {
        let mut rng = Lcg::new(5);
        let sample = rng.sample_indices(4, 10);
        assert_eq!(sample, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_fork_streams_differ() {
        let base = Lcg::new(42);
        let mut s1 = base.fork(1);
        let mut s2 = base.fork(2);
        let a: Vec<f64> = (0..5).map(|_| s1.next_f64()).collect();
        let b: Vec<f64> = (0..5).map(|_| s2.next_f64()).collect();
        assert_ne!(a, b);
    }
}
