//! Sparse-times-dense multiplication modulo X^N - 1
//!
//! The product is computed by a randomized windowed convolution: all 16
//! possible 0..15-bit shifted copies of the dense operand are precomputed
//! into a table whose physical slot order is freshly permuted on every
//! call, and the sparse terms are processed in a freshly permuted order.
//! A term with exponent `e` selects the table row for `e mod 16` and XORs
//! it into the accumulator at 16-bit granularity (`e / 16` half-half-words
//! in), so no data-dependent bit-shift ever executes. The permutations
//! decorrelate the observable access sequence from the secret support.
//!
//! This randomization is a mitigation, not a proof of constant-time table
//! access: on platforms where the 16-row table still straddles cache
//! lines adversarially, an oblivious linear scan over all rows (selected
//! by constant-time mask, as done for the sparse expansion in
//! [`SparsePoly::to_dense`]) is the stronger alternative. The scan costs
//! a factor of 16 per term and is not what the reference scheme ships.

use alloc::vec;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::params::CyclicRing;
use super::poly::{DensePoly, SparsePoly};
use super::sampling;
use crate::error::Result;

/// Number of precomputed shifted copies of the dense operand
const TABLE: usize = 16;

/// Fisher-Yates pass over an index array, driven by u16 draws from the
/// randomization context
///
/// Position `i` swaps with `i + r[i] mod (len - i)`, so the result is a
/// uniformly distributed permutation of the initial contents.
fn permutation<X: RngCore + CryptoRng>(indices: &mut [u16], ctx: &mut X) {
    let len = indices.len();
    let mut rand = vec![0u8; len * 2];
    ctx.fill_bytes(&mut rand);

    for i in 0..len.saturating_sub(1) {
        let r = u16::from_le_bytes([rand[2 * i], rand[2 * i + 1]]) as usize;
        indices.swap(i, i + r % (len - i));
    }
}

/// Randomized windowed convolution of a sparse and a dense polynomial
///
/// Writes the un-reduced product (degree up to 2N - 2) into `o`, which
/// must hold `2 * N_WORDS + 1` zeroed words.
fn fast_convolution_mult<R: CyclicRing, X: RngCore + CryptoRng>(
    o: &mut [u64],
    a1: &[u32],
    a2: &[u64],
    ctx: &mut X,
) {
    let w = R::N_WORDS;
    let row = w + 1;
    debug_assert_eq!(o.len(), 2 * w + 1);
    debug_assert_eq!(a2.len(), w);

    let mut permuted_table: [u16; TABLE] = core::array::from_fn(|i| i as u16);
    permutation(&mut permuted_table, ctx);

    // Table row for shift 0: the operand itself plus a zero carry word.
    let mut table = Zeroizing::new(vec![0u64; TABLE * row]);
    let base = permuted_table[0] as usize * row;
    table[base..base + w].copy_from_slice(a2);
    table[base + w] = 0;

    for i in 1..TABLE {
        let base = permuted_table[i] as usize * row;
        let mut carry = 0u64;
        for j in 0..w {
            table[base + j] = (a2[j] << i) ^ carry;
            carry = a2[j] >> (64 - i);
        }
        table[base + w] = carry;
    }

    let weight = a1.len();
    let mut permuted_terms = Zeroizing::new(vec![0u16; weight]);
    for (i, t) in permuted_terms.iter_mut().enumerate() {
        *t = i as u16;
    }
    permutation(&mut permuted_terms, ctx);

    for &t in permuted_terms.iter() {
        let e = a1[t as usize];
        let shift = (e & 0xF) as usize;
        let offset = (e >> 4) as usize;
        let word = offset >> 2;
        let bits = ((offset & 3) << 4) as u32;

        let base = permuted_table[shift] as usize * row;
        for j in 0..row {
            let v = table[base + j];
            // Split shift keeps the carry path well-defined when bits == 0.
            o[word + j] ^= v << bits;
            o[word + j + 1] ^= (v >> 1) >> (63 - bits);
        }
    }
}

/// Modular reduction of a double-length convolution result
///
/// Computes the canonical representative of `a mod (X^N - 1)` by folding
/// the wrapped-around high bits back down: X^N = 1, so bit N + i
/// contributes to bit i. The top word is then masked so bits >= N stay
/// zero. Requires `N mod 64 != 0` (see [`CyclicRing`]).
fn reduce<R: CyclicRing>(o: &mut [u64], a: &[u64]) {
    let w = R::N_WORDS;
    let b = (R::N & 0x3F) as u32;
    debug_assert_ne!(b, 0);
    debug_assert!(a.len() >= 2 * w);

    for i in 0..w {
        let r = a[i + w - 1] >> b;
        let carry = a[i + w] << (64 - b);
        o[i] = a[i] ^ r ^ carry;
    }
    o[w - 1] &= R::RED_MASK;
}

/// Multiplies a sparse polynomial by a dense polynomial modulo X^N - 1
///
/// The randomization context drives the two blinding permutations of the
/// convolution; it does not affect the numerical result. Replaying a
/// context from the same state reproduces the exact same computation.
pub fn multiply<R: CyclicRing, X: RngCore + CryptoRng>(
    a1: &SparsePoly<R>,
    a2: &DensePoly<R>,
    ctx: &mut X,
) -> DensePoly<R> {
    let mut tmp = Zeroizing::new(vec![0u64; 2 * R::N_WORDS + 1]);
    fast_convolution_mult::<R, X>(&mut tmp, a1.support(), a2.as_words(), ctx);

    let mut o = DensePoly::zero();
    reduce::<R>(o.as_mut_words(), &tmp);
    o
}

/// Two XOR-shares of a masked product
///
/// `value ^ mask` equals the plain product; neither share alone is a
/// deterministic function of both secret operands.
#[derive(Debug)]
pub struct Shares<R: CyclicRing> {
    /// First share of the product
    pub value: DensePoly<R>,
    /// Second share (the blinding mask folded with one sub-product)
    pub mask: DensePoly<R>,
}

impl<R: CyclicRing> Clone for Shares<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            mask: self.mask.clone(),
        }
    }
}

impl<R: CyclicRing> PartialEq for Shares<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.mask == other.mask
    }
}

impl<R: CyclicRing> Eq for Shares<R> {}

impl<R: CyclicRing> Shares<R> {
    /// Recombines the two shares into the unmasked product
    pub fn recombine(&self) -> DensePoly<R> {
        &self.value ^ &self.mask
    }
}

impl<R: CyclicRing> Zeroize for Shares<R> {
    fn zeroize(&mut self) {
        self.value.zeroize();
        self.mask.zeroize();
    }
}

impl<R: CyclicRing> Drop for Shares<R> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<R: CyclicRing> zeroize::ZeroizeOnDrop for Shares<R> {}

/// Multiplies with two-share XOR masking of the product
///
/// Both operands are split structurally in half — the sparse support at
/// `weight / 2`, the dense words at `N_WORDS / 2` — and the four
/// sub-products are distributed over the two output shares together with
/// a fresh fixed-weight blinding mask drawn from the randomization
/// context:
///
/// ```text
/// value = mask ^ hi*lo ^ lo*hi ^ lo*lo
/// mask  = mask ^ hi*hi
/// ```
///
/// Their XOR telescopes to all four cross terms, i.e. the plain product,
/// while each individual share mixes the independent mask in. The halves
/// keep their original term positions; each carries only its own terms,
/// so recombination is exact for every weight, odd ones included.
///
/// Errors only if the weight exceeds the ring degree, which
/// [`SparsePoly`] construction already rules out.
pub fn masked_multiply<R: CyclicRing, X: RngCore + CryptoRng>(
    a1: &SparsePoly<R>,
    a2: &DensePoly<R>,
    ctx: &mut X,
) -> Result<Shares<R>> {
    let weight = a1.weight();
    let mask = sampling::random_fixed_weight::<R, X>(ctx, weight)?.to_dense();

    // Structural operand splits: positions preserved, XOR of the halves
    // gives back the original.
    let (lo, hi) = a1.support().split_at(weight / 2);
    let sparse_lo = SparsePoly::<R>::from_support(lo)?;
    let sparse_hi = SparsePoly::<R>::from_support(hi)?;

    let mid = R::N_WORDS / 2;
    let mut dense_lo = DensePoly::<R>::zero();
    let mut dense_hi = DensePoly::<R>::zero();
    dense_lo.as_mut_words()[..mid].copy_from_slice(&a2.as_words()[..mid]);
    dense_hi.as_mut_words()[mid..].copy_from_slice(&a2.as_words()[mid..]);

    let mut value = multiply(&sparse_hi, &dense_lo, ctx);
    value ^= &multiply(&sparse_lo, &dense_hi, ctx);
    value ^= &mask;

    let mut mask_share = mask;
    mask_share ^= &multiply(&sparse_hi, &dense_hi, ctx);
    value ^= &multiply(&sparse_lo, &dense_lo, ctx);

    Ok(Shares {
        value,
        mask: mask_share,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::SeedExpander;

    #[derive(Clone, Debug)]
    struct Toy17;
    impl CyclicRing for Toy17 {
        const N: usize = 17;
        const OMEGA: usize = 2;
        const OMEGA_R: usize = 3;
    }

    #[derive(Clone, Debug)]
    struct Wide127;
    impl CyclicRing for Wide127 {
        const N: usize = 127;
        const OMEGA: usize = 5;
        const OMEGA_R: usize = 7;
    }

    fn ctx(tag: u8) -> SeedExpander {
        SeedExpander::from_seed([tag; 32])
    }

    /// Bit-at-a-time reference reduction: bit i of the input contributes
    /// to bit i mod N of the output.
    fn naive_reduce<R: CyclicRing>(a: &[u64]) -> DensePoly<R> {
        let mut out = DensePoly::<R>::zero();
        for i in 0..a.len() * 64 {
            if (a[i / 64] >> (i % 64)) & 1 == 1 {
                let k = i % R::N;
                out.as_mut_words()[k / 64] ^= 1u64 << (k % 64);
            }
        }
        out
    }

    /// Rotate-and-accumulate reference product.
    fn naive_mul<R: CyclicRing>(a1: &SparsePoly<R>, a2: &DensePoly<R>) -> DensePoly<R> {
        let mut out = DensePoly::<R>::zero();
        for &e in a1.support() {
            for k in 0..R::N {
                let src = (k + R::N - (e as usize % R::N)) % R::N;
                if a2.coefficient(src) {
                    out.as_mut_words()[k / 64] ^= 1u64 << (k % 64);
                }
            }
        }
        out
    }

    fn random_dense<R: CyclicRing>(tag: u8) -> DensePoly<R> {
        sampling::random_dense::<R, _>(&mut ctx(tag))
    }

    fn is_canonical<R: CyclicRing>(p: &DensePoly<R>) -> bool {
        p.as_words()[R::N_WORDS - 1] & !R::RED_MASK == 0
    }

    #[test]
    fn permutation_is_bijection() {
        for len in [1usize, 2, 7, 16, 66] {
            let mut indices: alloc::vec::Vec<u16> = (0..len as u16).collect();
            permutation(&mut indices, &mut ctx(9));
            let mut sorted = indices.clone();
            sorted.sort_unstable();
            let identity: alloc::vec::Vec<u16> = (0..len as u16).collect();
            assert_eq!(sorted, identity, "not a bijection for len {}", len);
        }
    }

    #[test]
    fn reduce_matches_naive() {
        // Convolution outputs have degree at most 2N - 2; generate inputs
        // within that bound.
        let mut c = ctx(11);
        for _ in 0..16 {
            let mut a = vec![0u64; 2 * Wide127::N_WORDS + 1];
            for w in a.iter_mut() {
                *w = c.next_u64();
            }
            let top_bit = 2 * Wide127::N - 1;
            for (i, w) in a.iter_mut().enumerate() {
                if i * 64 >= top_bit {
                    *w = 0;
                } else if (i + 1) * 64 > top_bit {
                    *w &= (1u64 << (top_bit - i * 64)) - 1;
                }
            }

            let mut out = DensePoly::<Wide127>::zero();
            reduce::<Wide127>(out.as_mut_words(), &a);
            assert_eq!(out, naive_reduce::<Wide127>(&a));
            assert!(is_canonical(&out));
        }
    }

    #[test]
    fn reduce_matches_naive_toy_ring() {
        // 2N - 1 = 33 significant bits, single-word ring.
        let a = [0x1_5A5A_5A5Au64 & ((1u64 << 33) - 1), 0, 0];
        let mut out = DensePoly::<Toy17>::zero();
        reduce::<Toy17>(out.as_mut_words(), &a);
        assert_eq!(out, naive_reduce::<Toy17>(&a));
    }

    #[test]
    fn single_term_is_cyclic_rotation() {
        let a2 = random_dense::<Wide127>(3);
        for e in [0u32, 1, 15, 16, 63, 64, 126] {
            let a1 = SparsePoly::<Wide127>::from_support(&[e]).unwrap();
            let got = multiply(&a1, &a2, &mut ctx(4));
            assert_eq!(got, naive_mul(&a1, &a2), "rotation by {}", e);
        }
    }

    #[test]
    fn fixed_vector_toy_ring() {
        // The all-ones pattern is invariant under rotation, so x^0*a2 and
        // x^5*a2 cancel and the product is zero.
        let a1 = SparsePoly::<Toy17>::from_support(&[0, 5]).unwrap();
        let a2 = DensePoly::<Toy17>::from_words(&[(1u64 << 17) - 1]).unwrap();
        let got = multiply(&a1, &a2, &mut ctx(5));
        assert_eq!(got, DensePoly::<Toy17>::zero());
    }

    #[test]
    fn matches_naive_mul() {
        let a1 = SparsePoly::<Wide127>::from_support(&[1, 8, 33, 64, 100]).unwrap();
        let a2 = random_dense::<Wide127>(6);
        let got = multiply(&a1, &a2, &mut ctx(7));
        assert_eq!(got, naive_mul(&a1, &a2));
        assert!(is_canonical(&got));
    }

    #[test]
    fn empty_support_multiplies_to_zero() {
        let a1 = SparsePoly::<Wide127>::from_support(&[]).unwrap();
        let a2 = random_dense::<Wide127>(8);
        assert_eq!(multiply(&a1, &a2, &mut ctx(9)), DensePoly::<Wide127>::zero());
    }

    #[test]
    fn distributes_over_xor() {
        let a = SparsePoly::<Wide127>::from_support(&[2, 40, 77]).unwrap();
        let b = random_dense::<Wide127>(10);
        let c = random_dense::<Wide127>(11);

        let lhs = multiply(&a, &(&b ^ &c), &mut ctx(12));
        let mut rhs = multiply(&a, &b, &mut ctx(13));
        rhs ^= &multiply(&a, &c, &mut ctx(14));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn randomization_does_not_change_the_product() {
        let a1 = SparsePoly::<Wide127>::from_support(&[5, 19, 90]).unwrap();
        let a2 = random_dense::<Wide127>(15);
        let p1 = multiply(&a1, &a2, &mut ctx(16));
        let p2 = multiply(&a1, &a2, &mut ctx(17));
        assert_eq!(p1, p2);
    }

    #[test]
    fn replayed_context_is_bit_identical() {
        let a1 = SparsePoly::<Wide127>::from_support(&[5, 19, 90]).unwrap();
        let a2 = random_dense::<Wide127>(18);

        let s1 = masked_multiply(&a1, &a2, &mut ctx(19)).unwrap();
        let s2 = masked_multiply(&a1, &a2, &mut ctx(19)).unwrap();
        assert_eq!(s1.value, s2.value);
        assert_eq!(s1.mask, s2.mask);
    }

    #[test]
    fn shares_recombine_to_plain_product() {
        // Odd weight exercises the uneven support split.
        let a1 = SparsePoly::<Wide127>::from_support(&[1, 8, 33, 64, 100]).unwrap();
        let a2 = random_dense::<Wide127>(20);

        let plain = multiply(&a1, &a2, &mut ctx(21));
        let shares = masked_multiply(&a1, &a2, &mut ctx(22)).unwrap();
        assert_eq!(shares.recombine(), plain);
        assert!(is_canonical(&shares.value));
        assert!(is_canonical(&shares.mask));
    }

    #[test]
    fn recombination_is_independent_of_the_mask() {
        let a1 = SparsePoly::<Wide127>::from_support(&[3, 50, 80, 120]).unwrap();
        let a2 = random_dense::<Wide127>(23);

        let s1 = masked_multiply(&a1, &a2, &mut ctx(24)).unwrap();
        let s2 = masked_multiply(&a1, &a2, &mut ctx(25)).unwrap();
        assert_ne!(s1.mask, s2.mask);
        assert_eq!(s1.recombine(), s2.recombine());
    }

    #[test]
    fn masked_multiply_edge_weights() {
        let a2 = random_dense::<Wide127>(26);

        for support in [&[][..], &[42u32][..]] {
            let a1 = SparsePoly::<Wide127>::from_support(support).unwrap();
            let plain = multiply(&a1, &a2, &mut ctx(27));
            let shares = masked_multiply(&a1, &a2, &mut ctx(28)).unwrap();
            assert_eq!(shares.recombine(), plain);
        }
    }

    #[test]
    fn masked_multiply_toy_ring() {
        let a1 = SparsePoly::<Toy17>::from_support(&[0, 5]).unwrap();
        let a2 = random_dense::<Toy17>(29);
        let plain = multiply(&a1, &a2, &mut ctx(30));
        let shares = masked_multiply(&a1, &a2, &mut ctx(31)).unwrap();
        assert_eq!(shares.recombine(), plain);
    }
}
