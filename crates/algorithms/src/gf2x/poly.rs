//! Dense and sparse polynomial containers
//!
//! A dense polynomial is an element of GF(2)[X]/(X^N - 1) stored as a
//! word-packed bit vector: bit `i mod 64` of word `i / 64` is the
//! coefficient of X^i, and bits at positions >= N are always zero (the
//! canonical-form invariant). A sparse polynomial is stored as the list
//! of exponents of its nonzero coefficients (its support), with weight =
//! support length.
//!
//! Both containers are sized by the ring parameter at construction and
//! never resized afterwards.

use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;
use core::ops::{BitXor, BitXorAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use super::params::CyclicRing;
use crate::error::{Error, Result};

/// A dense polynomial in GF(2)[X]/(X^N - 1)
#[derive(Debug)]
pub struct DensePoly<R: CyclicRing> {
    words: Vec<u64>,
    _marker: PhantomData<R>,
}

// Manual impl: the ring marker is phantom, so cloning must not require
// `R: Clone` as a derive would.
impl<R: CyclicRing> Clone for DensePoly<R> {
    fn clone(&self) -> Self {
        Self {
            words: self.words.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: CyclicRing> DensePoly<R> {
    /// Creates the zero polynomial
    pub fn zero() -> Self {
        Self {
            words: vec![0u64; R::N_WORDS],
            _marker: PhantomData,
        }
    }

    /// Creates a polynomial from a word slice
    ///
    /// The slice must hold exactly `N_WORDS` words. Bits at positions
    /// >= N are cleared, so the result is always in canonical form.
    pub fn from_words(words: &[u64]) -> Result<Self> {
        if words.len() != R::N_WORDS {
            return Err(Error::Length {
                context: "dense polynomial",
                expected: R::N_WORDS,
                actual: words.len(),
            });
        }

        let mut poly = Self {
            words: words.to_vec(),
            _marker: PhantomData,
        };
        poly.words[R::N_WORDS - 1] &= R::RED_MASK;
        Ok(poly)
    }

    /// Returns a view of the packed coefficient words
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Returns a mutable view of the packed coefficient words
    pub fn as_mut_words(&mut self) -> &mut [u64] {
        &mut self.words
    }

    /// Returns the coefficient of X^i
    ///
    /// Intended for tests and non-secret inspection: the access pattern
    /// depends on `i`.
    pub fn coefficient(&self, i: usize) -> bool {
        (self.words[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Returns the Hamming weight of the polynomial
    pub fn hamming_weight(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }
}

impl<R: CyclicRing> ConstantTimeEq for DensePoly<R> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.words
            .iter()
            .zip(other.words.iter())
            .fold(Choice::from(1u8), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl<R: CyclicRing> PartialEq for DensePoly<R> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<R: CyclicRing> Eq for DensePoly<R> {}

impl<R: CyclicRing> Zeroize for DensePoly<R> {
    fn zeroize(&mut self) {
        self.words.zeroize();
    }
}

// Vector addition in GF(2) is XOR.

impl<R: CyclicRing> BitXorAssign<&DensePoly<R>> for DensePoly<R> {
    fn bitxor_assign(&mut self, rhs: &DensePoly<R>) {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a ^= b;
        }
    }
}

impl<R: CyclicRing> BitXor for &DensePoly<R> {
    type Output = DensePoly<R>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out ^= rhs;
        out
    }
}

/// A sparse polynomial in GF(2)[X]/(X^N - 1), stored by support
#[derive(Debug)]
pub struct SparsePoly<R: CyclicRing> {
    support: Vec<u32>,
    _marker: PhantomData<R>,
}

impl<R: CyclicRing> Clone for SparsePoly<R> {
    fn clone(&self) -> Self {
        Self {
            support: self.support.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: CyclicRing> PartialEq for SparsePoly<R> {
    fn eq(&self, other: &Self) -> bool {
        self.support == other.support
    }
}

impl<R: CyclicRing> Eq for SparsePoly<R> {}

impl<R: CyclicRing> SparsePoly<R> {
    /// Creates a sparse polynomial from a list of exponents
    ///
    /// Only the structural weight is validated. The exponent *values*
    /// are secret data and are deliberately not checked against the ring
    /// degree: callers must guarantee every exponent lies in [0, N).
    pub fn from_support(support: &[u32]) -> Result<Self> {
        if support.len() > R::N {
            return Err(Error::Parameter {
                name: "support",
                reason: "weight exceeds ring degree",
            });
        }

        Ok(Self {
            support: support.to_vec(),
            _marker: PhantomData,
        })
    }

    /// Returns the support (list of nonzero-coefficient exponents)
    pub fn support(&self) -> &[u32] {
        &self.support
    }

    /// Returns the Hamming weight (number of support entries)
    pub fn weight(&self) -> usize {
        self.support.len()
    }

    /// Expands the sparse polynomial to its dense representation
    ///
    /// The write is oblivious: every output word is visited for every
    /// support entry and the destination is selected with a constant-time
    /// mask, so the memory-access pattern is independent of the secret
    /// exponents.
    pub fn to_dense(&self) -> DensePoly<R> {
        let mut out = DensePoly::zero();
        for &e in &self.support {
            let word = e >> 6;
            let bit = 1u64 << (e & 0x3F);
            for (j, w) in out.as_mut_words().iter_mut().enumerate() {
                let hit = (j as u32).ct_eq(&word);
                *w |= u64::conditional_select(&0, &bit, hit);
            }
        }
        out
    }
}

impl<R: CyclicRing> Zeroize for SparsePoly<R> {
    fn zeroize(&mut self) {
        self.support.zeroize();
    }
}
