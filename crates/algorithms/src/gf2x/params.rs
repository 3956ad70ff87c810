//! Ring parameters for GF(2)[X]/(X^n - 1) arithmetic
//!
//! All sizes derived here are public configuration constants: loop bounds
//! and buffer lengths may depend on them freely without leaking secrets.

use hqcrypt_params::pqc::hqc::{HQC_128, HQC_192, HQC_256};

/// Mask clearing the unused high bits of the top word of a dense
/// polynomial over a ring of degree `n`
pub const fn red_mask(n: usize) -> u64 {
    let b = n % 64;
    if b == 0 {
        u64::MAX
    } else {
        (1u64 << b) - 1
    }
}

/// Number of 64-bit words holding an `n`-bit dense polynomial
pub const fn word_len(n: usize) -> usize {
    (n + 63) / 64
}

/// Trait defining a cyclic polynomial ring GF(2)[X]/(X^N - 1)
///
/// The modular reducer folds wrapped-around bits at bit position
/// `N mod 64` within a word, so implementations must have `N` not a
/// multiple of 64. Every published HQC degree is prime, which satisfies
/// this.
pub trait CyclicRing {
    /// The ring degree N (modulus exponent of X^N - 1)
    const N: usize;

    /// Number of 64-bit words in a dense polynomial
    const N_WORDS: usize = word_len(Self::N);

    /// Mask for the top word enforcing the canonical-form invariant
    /// (bits at positions >= N are always zero)
    const RED_MASK: u64 = red_mask(Self::N);

    /// Hamming weight of the secret key vectors
    const OMEGA: usize;

    /// Hamming weight of the error/randomness vectors
    const OMEGA_R: usize;
}

/// HQC-128 ring (NIST security level 1)
#[derive(Clone, Debug)]
pub struct Hqc128Ring;

impl CyclicRing for Hqc128Ring {
    const N: usize = HQC_128.n;
    const OMEGA: usize = HQC_128.omega;
    const OMEGA_R: usize = HQC_128.omega_r;
}

/// HQC-192 ring (NIST security level 3)
#[derive(Clone, Debug)]
pub struct Hqc192Ring;

impl CyclicRing for Hqc192Ring {
    const N: usize = HQC_192.n;
    const OMEGA: usize = HQC_192.omega;
    const OMEGA_R: usize = HQC_192.omega_r;
}

/// HQC-256 ring (NIST security level 5)
#[derive(Clone, Debug)]
pub struct Hqc256Ring;

impl CyclicRing for Hqc256Ring {
    const N: usize = HQC_256.n;
    const OMEGA: usize = HQC_256.omega;
    const OMEGA_R: usize = HQC_256.omega_r;
}
