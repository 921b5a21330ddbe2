//! Seedable random source shared by every generation stage.
//!
//! All draws are taken from 32-bit words of a `ChaCha8Rng` stream and counted, so the
//! exact stream position can be saved as `(seed, words_drawn)` and restored later by
//! re-seeding and seeking to that word.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::{Deserialize, Serialize};

/// Serializable position of a [`RandomSource`] stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomState {
    pub seed: u64,
    pub words_drawn: u64,
    /// Bit pattern of the cached second polar-method sample, if any.
    pub spare_gaussian_bits: Option<u64>,
}

pub struct RandomSource {
    seed: u64,
    rng: ChaCha8Rng,
    words_drawn: u64,
    spare_gaussian: Option<f64>,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: ChaCha8Rng::seed_from_u64(seed), words_drawn: 0, spare_gaussian: None }
    }

    /// Seeded from wall clock, process id and a process-wide counter.
    pub fn from_entropy() -> Self {
        Self::new(generate_runtime_seed())
    }

    pub fn from_state(state: RandomState) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(state.seed);
        rng.set_word_pos(u128::from(state.words_drawn));
        Self {
            seed: state.seed,
            rng,
            words_drawn: state.words_drawn,
            spare_gaussian: state.spare_gaussian_bits.map(f64::from_bits),
        }
    }

    pub fn state(&self) -> RandomState {
        RandomState {
            seed: self.seed,
            words_drawn: self.words_drawn,
            spare_gaussian_bits: self.spare_gaussian.map(f64::to_bits),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[0, bound)`. An empty bound yields 0 without drawing.
    pub fn uniform(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "uniform bound must be positive");
        if bound <= 1 {
            return 0;
        }
        let bound = bound as u64;
        // Values below this threshold would bias the modulo toward small results.
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u64();
            if value >= threshold {
                return (value % bound) as usize;
            }
        }
    }

    /// Uniform integer in `[low, high)`.
    pub fn uniform_range(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low < high, "uniform range [{low}, {high}) is empty");
        if high <= low {
            return low;
        }
        low + self.uniform(high - low)
    }

    /// Uniform float in `[0, 1)` with 53 bits of precision.
    pub fn unit_f64(&mut self) -> f64 {
        let high = u64::from(self.next_word() >> 5);
        let low = u64::from(self.next_word() >> 6);
        ((high << 26) + low) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    /// Standard normal sample (polar method; every second call is served from a cache).
    pub fn gaussian(&mut self) -> f64 {
        if let Some(spare) = self.spare_gaussian.take() {
            return spare;
        }
        loop {
            let v1 = 2.0 * self.unit_f64() - 1.0;
            let v2 = 2.0 * self.unit_f64() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                let multiplier = (-2.0 * s.ln() / s).sqrt();
                self.spare_gaussian = Some(v2 * multiplier);
                return v1 * multiplier;
            }
        }
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_word());
        let low = u64::from(self.next_word());
        (high << 32) | low
    }

    fn next_word(&mut self) -> u32 {
        self.words_drawn = self.words_drawn.wrapping_add(1);
        self.rng.next_u32()
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
