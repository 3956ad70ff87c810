//! Arithmetic engine for code-based key encapsulation
//!
//! This crate implements the polynomial arithmetic core of an HQC-style
//! key encapsulation mechanism: multiplication of a sparse polynomial (the
//! scheme's secret and error vectors) by a dense polynomial, modulo
//! X^n - 1 over GF(2). The implementation is hardened against two classes
//! of side-channel leakage:
//!
//! - cache timing, by visiting a fixed-size table of pre-shifted operand
//!   copies in a freshly randomized order on every call, and
//! - power/EM analysis, by an optional two-share XOR masking of the
//!   product in which neither output share alone is a deterministic
//!   function of both secret inputs.
//!
//! No branch, loop bound, or memory index in the core depends on the
//! *value* of a secret exponent or coefficient; only the public length
//! parameters (ring degree, word count, Hamming weight) shape control
//! flow.
//!
//! The library is designed to be usable in both `std` and `no_std`
//! environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Deterministic randomization context
pub mod expand;
pub use expand::SeedExpander;

// GF(2)[X]/(X^n - 1) arithmetic
pub mod gf2x;
pub use gf2x::{
    masked_multiply, multiply, CyclicRing, DensePoly, Hqc128Ring, Hqc192Ring, Hqc256Ring, Shares,
    SparsePoly,
};
