use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// The simulation's random stream.
///
/// One stream is owned by the aggregator and advanced by every draw, so a
/// run is reproducible end to end from its seed. The stream's state never
/// leaves the engine.
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: StdRng,
    seed: Option<u64>,
}

impl SimRng {
    /// Create a stream from an optional seed. `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { inner, seed }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Independent stream for run `run_index`, derived from `base_seed`.
    /// Run i uses `base_seed + i`.
    pub fn for_run(base_seed: u64, run_index: usize) -> Self {
        Self::seeded(base_seed.wrapping_add(run_index as u64))
    }

    /// Seed this stream was created from, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw a fresh seed from this stream.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Uniform draw in [0, 1).
    pub fn uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Normal draw. A zero (or invalid) std-dev returns `mean` and consumes
    /// nothing from the stream.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        if std_dev <= 0.0 {
            return mean;
        }
        match Normal::new(mean, std_dev) {
            Ok(dist) => dist.sample(&mut self.inner),
            Err(_) => mean,
        }
    }
}
