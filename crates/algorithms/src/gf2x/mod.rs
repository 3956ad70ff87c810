//! GF(2)[X]/(X^n - 1) arithmetic
//!
//! This module provides the sparse-times-dense ring multiplication at the
//! heart of HQC-style encapsulation, together with the polynomial
//! containers, ring parameter sets, and samplers it builds on. See
//! [`mul`] for the side-channel design of the multiplication itself.

pub mod mul;
pub mod params;
pub mod poly;
pub mod sampling;

pub use mul::{masked_multiply, multiply, Shares};
pub use params::{CyclicRing, Hqc128Ring, Hqc192Ring, Hqc256Ring};
pub use poly::{DensePoly, SparsePoly};

/// Prelude for easy importing of the common arithmetic types
pub mod prelude {
    pub use super::mul::{masked_multiply, multiply, Shares};
    pub use super::params::{CyclicRing, Hqc128Ring, Hqc192Ring, Hqc256Ring};
    pub use super::poly::{DensePoly, SparsePoly};
    pub use super::sampling::{random_dense, random_fixed_weight};
}
