//! Sampling of sparse and dense ring elements
//!
//! The fixed-weight sampler is the collaborator consumed by the masked
//! product for its blinding share, and by the scheme layer for secret and
//! error vectors. Duplicate collapsing after the draw is done with
//! constant-time compares and selects: the sampled exponents are secret,
//! so no branch may depend on their values. The rejection loops depend
//! only on the random draws themselves, never on previously sampled
//! secrets.

use alloc::vec;

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroizing;

use super::params::CyclicRing;
use super::poly::{DensePoly, SparsePoly};
use crate::error::{Error, Result};

/// Samples a sparse polynomial with exactly `weight` distinct exponents,
/// uniformly distributed over [0, N)
///
/// Entry `i` is drawn uniformly from [i, N) by unbiased rejection
/// sampling; a backwards pass then replaces any entry equal to a later
/// one by its own index `i`, which is strictly smaller than every later
/// entry and therefore cannot collide. The resulting support is exactly
/// `weight` distinct values and the distribution over supports is
/// uniform.
pub fn random_fixed_weight<R: CyclicRing, X: RngCore + CryptoRng>(
    ctx: &mut X,
    weight: usize,
) -> Result<SparsePoly<R>> {
    if weight > R::N {
        return Err(Error::Parameter {
            name: "weight",
            reason: "exceeds ring degree",
        });
    }

    let mut support = Zeroizing::new(vec![0u32; weight]);

    for i in 0..weight {
        let bound = (R::N - i) as u64;
        // Largest multiple of `bound` representable in 32 bits; draws at
        // or above it would bias the modular reduction and are redrawn.
        let threshold = (1u64 << 32) / bound * bound;
        let r = loop {
            let r = u64::from(ctx.next_u32());
            if r < threshold {
                break r;
            }
        };
        support[i] = i as u32 + (r % bound) as u32;
    }

    for i in (0..weight.saturating_sub(1)).rev() {
        let mut found = Choice::from(0u8);
        for j in (i + 1)..weight {
            found |= support[j].ct_eq(&support[i]);
        }
        support[i] = u32::conditional_select(&support[i], &(i as u32), found);
    }

    SparsePoly::from_support(&support)
}

/// Samples a uniformly random dense polynomial in canonical form
pub fn random_dense<R: CyclicRing, X: RngCore + CryptoRng>(ctx: &mut X) -> DensePoly<R> {
    let mut o = DensePoly::<R>::zero();
    for w in o.as_mut_words().iter_mut() {
        *w = ctx.next_u64();
    }
    o.as_mut_words()[R::N_WORDS - 1] &= R::RED_MASK;
    o
}
