//! # hqcrypt
//!
//! Side-channel hardened polynomial arithmetic over GF(2)[X]/(X^n - 1),
//! the core primitive of code-based key encapsulation schemes in the HQC
//! family. The multiplication of a sparse (secret) polynomial by a dense
//! polynomial is performed through a randomized windowed convolution and,
//! optionally, a two-share XOR masking of the product.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the member
//! crates:
//!
//! - [`hqcrypt-algorithms`]: the arithmetic engine (reduction, randomized
//!   convolution, plain and masked products, samplers, seed expander)
//! - [`hqcrypt-params`]: the published HQC parameter sets
//!
//! ## Example
//!
//! ```
//! use hqcrypt::algorithms::expand::SeedExpander;
//! use hqcrypt::algorithms::gf2x::{self, sampling, Hqc128Ring, SparsePoly};
//!
//! let mut ctx = SeedExpander::from_seed([7u8; 32]);
//! let a1: SparsePoly<Hqc128Ring> = sampling::random_fixed_weight(&mut ctx, 66).unwrap();
//! let a2 = sampling::random_dense(&mut ctx);
//!
//! // The two shares of the masked product XOR back to the plain product.
//! let product = gf2x::multiply(&a1, &a2, &mut ctx);
//! let shares = gf2x::masked_multiply(&a1, &a2, &mut ctx).unwrap();
//! assert_eq!(shares.recombine(), product);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use hqcrypt_algorithms as algorithms;
pub use hqcrypt_params as params;

// Workspace dependencies users are likely to need alongside the library
pub use rand;
pub use subtle;
pub use zeroize;

// Commonly used items at the crate root
pub use hqcrypt_algorithms::expand::SeedExpander;
pub use hqcrypt_algorithms::gf2x::{
    masked_multiply, multiply, CyclicRing, DensePoly, Shares, SparsePoly,
};
