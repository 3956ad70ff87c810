//! Deterministic seed expansion
//!
//! Every randomized operation in this crate takes an explicit
//! randomization context as a `RngCore + CryptoRng` parameter, never an
//! ambient or global source: concurrent callers that need independent
//! randomness must hold independent contexts. [`SeedExpander`] is the
//! deterministic instance used throughout the scheme — the same seed
//! always yields the same byte stream, so every multiplication it drives
//! is exactly replayable.

use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Number of seed bytes consumed by [`SeedExpander::from_seed`]
pub const SEED_BYTES: usize = 32;

/// Deterministic randomization context backed by ChaCha20
///
/// The context is stateful: each draw of random bytes advances it. Two
/// expanders built from the same seed produce identical streams.
#[derive(Clone, Debug)]
pub struct SeedExpander {
    stream: ChaCha20Rng,
}

impl SeedExpander {
    /// Creates an expander from a fixed-size seed
    pub fn from_seed(seed: [u8; SEED_BYTES]) -> Self {
        Self {
            stream: ChaCha20Rng::from_seed(seed),
        }
    }
}

impl RngCore for SeedExpander {
    fn next_u32(&mut self) -> u32 {
        self.stream.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.stream.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.stream.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.stream.try_fill_bytes(dest)
    }
}

impl CryptoRng for SeedExpander {}
