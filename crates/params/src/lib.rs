//! Parameter constants for the hqcrypt library
//!
//! This crate holds the published parameter sets consumed by the
//! arithmetic crates. It contains no code, only constants, and is
//! always `no_std`.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod pqc;

pub use pqc::hqc::{HqcParams, HQC_128, HQC_192, HQC_256};
