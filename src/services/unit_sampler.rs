use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Source of uniform draws in `[0, 1)` used for the generator's noise term.
pub trait UnitSampler {
    fn sample(&mut self) -> f64;
}

pub struct UniformSampler<R: Rng> {
    rng: R,
    distribution: Uniform<f64>,
}

impl<R: Rng> UniformSampler<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            distribution: Uniform::new(0.0, 1.0),
        }
    }
}

impl<R: Rng> UnitSampler for UniformSampler<R> {
    fn sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }
}

impl<T: UnitSampler + ?Sized> UnitSampler for &mut T {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

impl<T: UnitSampler + ?Sized> UnitSampler for Box<T> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

/// Thread-local sampler when `seed` is `None`, otherwise a seeded `StdRng`.
pub fn sampler_from_seed(seed: Option<u64>) -> Box<dyn UnitSampler> {
    use rand::SeedableRng;
    match seed {
        Some(seed) => Box::new(UniformSampler::new(rand::rngs::StdRng::seed_from_u64(seed))),
        None => Box::new(UniformSampler::new(rand::thread_rng())),
    }
}
