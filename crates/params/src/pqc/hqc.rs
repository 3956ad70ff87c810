//! Constants for the HQC key encapsulation mechanism
//!
//! HQC works over the cyclic ring GF(2)[X]/(X^n - 1) with n a primitive
//! prime. Secret and error vectors are sparse with the fixed Hamming
//! weights below; all dense vectors occupy ceil(n/64) machine words.

/// Structure containing HQC parameters
pub struct HqcParams {
    /// Ring degree (modulus exponent of X^n - 1), a primitive prime
    pub n: usize,

    /// Hamming weight of the secret key vectors x, y
    pub omega: usize,

    /// Hamming weight of the error vector e
    pub omega_e: usize,

    /// Hamming weight of the randomness vectors r1, r2
    pub omega_r: usize,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Secret key size in bytes
    pub secret_key_size: usize,

    /// Ciphertext size in bytes
    pub ciphertext_size: usize,

    /// Shared secret size in bytes
    pub shared_secret_size: usize,
}

/// HQC-128 parameters (NIST security level 1)
pub const HQC_128: HqcParams = HqcParams {
    n: 17669,
    omega: 66,
    omega_e: 75,
    omega_r: 75,
    public_key_size: 2249,
    secret_key_size: 2305,
    ciphertext_size: 4481,
    shared_secret_size: 64,
};

/// HQC-192 parameters (NIST security level 3)
pub const HQC_192: HqcParams = HqcParams {
    n: 35851,
    omega: 100,
    omega_e: 114,
    omega_r: 114,
    public_key_size: 4522,
    secret_key_size: 4586,
    ciphertext_size: 9026,
    shared_secret_size: 64,
};

/// HQC-256 parameters (NIST security level 5)
pub const HQC_256: HqcParams = HqcParams {
    n: 57637,
    omega: 131,
    omega_e: 149,
    omega_r: 149,
    public_key_size: 7245,
    secret_key_size: 7317,
    ciphertext_size: 14469,
    shared_secret_size: 64,
};
