use rand::seq::SliceRandom;
use rand::Rng;

/// Strategy for producing the order in which dataset indices are visited
/// during an epoch.
pub trait Sampler {
    /// Returns the sequence of indices for one pass over a dataset of the
    /// given length.
    fn indices(&mut self, len: usize) -> Vec<usize>;
}

/// Visits samples in their stored order.
#[derive(Debug, Clone, Default)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }
}

impl Sampler for SequentialSampler {
    fn indices(&mut self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}

/// Visits samples in a freshly shuffled order each epoch.
#[derive(Debug)]
pub struct ShuffleSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> ShuffleSampler<R> {
    pub fn new(rng: R) -> Self {
        ShuffleSampler { rng }
    }
}

impl<R: Rng> Sampler for ShuffleSampler<R> {
    fn indices(&mut self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.rng);
        indices
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sequential_sampler() {
        let mut sampler = SequentialSampler::new();
        assert_eq!(sampler.indices(4), vec![0, 1, 2, 3]);
        assert_eq!(sampler.indices(0), Vec::<usize>::new());
    }

    #[test]
    fn test_shuffle_sampler_is_a_permutation() {
        let mut sampler = ShuffleSampler::new(StdRng::seed_from_u64(5));
        let mut indices = sampler.indices(10);
        indices.sort_unstable();
        assert_eq!(indices, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_sampler_is_reproducible() {
        let mut a = ShuffleSampler::new(StdRng::seed_from_u64(9));
        let mut b = ShuffleSampler::new(StdRng::seed_from_u64(9));
        assert_eq!(a.indices(16), b.indices(16));
    }
}
