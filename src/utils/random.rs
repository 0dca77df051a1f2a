use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of randomness for level draws and treap priorities.
///
/// Containers take the generator by value, so tests can hand in a seeded or
/// scripted one and get reproducible shapes.
pub trait RandomGenerator {
    fn next_u32(&mut self) -> u32;

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Returns true with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Default generator backed by `StdRng`.
pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Random {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Random {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomGenerator for Random {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl<G: RandomGenerator + ?Sized> RandomGenerator for Box<G> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
