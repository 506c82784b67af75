//! Deterministic random sources for forcing and sampling branch outcomes.

use jarvis_protocol::RandomSource;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source that always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct ConstRandom {
    value: f64,
}

impl ConstRandom {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl RandomSource for ConstRandom {
    fn next_unit(&self) -> f64 {
        self.value
    }
}

/// Seeded uniform source for reproducible distribution tests.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        self.rng.lock().random::<f64>()
    }
}
