//! The abstract randomness source the engine consumes.
//!
//! Per spec.md §5, the engine never sources or seeds entropy itself: "the
//! engine consumes an abstract `Rng` interface... The caller supplies and
//! seeds it." [`StdRng`] adapts any `rand::RngCore` (the teacher's own
//! dependency) to this trait, so callers can pass `rand::rngs::StdRng`
//! (seeded, for reproducible generation) or `rand::rngs::ThreadRng`
//! (unseeded) without the engine depending on a concrete algorithm.

/// A source of uniform randomness, supplied and seeded by the caller.
pub trait Rng {
    /// A uniform integer in `0..bound`.
    ///
    /// # Panics
    /// May panic if `bound == 0`.
    fn gen_range(&mut self, bound: usize) -> usize;

    /// Shuffles `slice` in place using a Fisher-Yates shuffle built on
    /// [`Rng::gen_range`].
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_range(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Adapts any `rand::RngCore` to the engine's [`Rng`] trait.
pub struct StdRng<R>(pub R);

impl<R: rand::RngCore> Rng for StdRng<R> {
    fn gen_range(&mut self, bound: usize) -> usize {
        use rand::Rng as _;
        self.0.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng(rand::rngs::StdRng::seed_from_u64(42));
        let mut v: Vec<u32> = (0..9).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn gen_range_stays_in_bound() {
        let mut rng = StdRng(rand::rngs::StdRng::seed_from_u64(1));
        for _ in 0..100 {
            assert!(rng.gen_range(7) < 7);
        }
    }
}
