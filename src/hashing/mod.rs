//! Hash primitives used by the transform engine.
//!
//! Stage A rotates through three fixed 512-bit digests ([`HashKind`]); Stage C
//! stretches the encoded result with SHAKE-256 (see [`xof`]).

pub mod xof;

use blake2::Blake2b512;
use sha2::Sha512;
use sha3::{Digest, Sha3_512};
use tracing::trace;

/// Fixed-size digests in the order Stage A rotates through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    /// SHA3-512 (Keccak, FIPS 202).
    Sha3_512,
    /// BLAKE2b with a 64-byte output, no key, salt or personalization.
    Blake2b512,
    /// SHA-512 (FIPS 180-4).
    Sha512,
}

impl HashKind {
    /// Rotation order; iteration `i` uses `ROTATION[i % 3]`.
    pub const ROTATION: [HashKind; 3] = [
        HashKind::Sha3_512,
        HashKind::Blake2b512,
        HashKind::Sha512,
    ];

    /// Returns the hash used for Stage-A iteration `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use passtretcher::hashing::HashKind;
    ///
    /// assert_eq!(HashKind::for_iteration(0), HashKind::Sha3_512);
    /// assert_eq!(HashKind::for_iteration(4), HashKind::Blake2b512);
    /// assert_eq!(HashKind::for_iteration(8), HashKind::Sha512);
    /// ```
    pub fn for_iteration(index: usize) -> Self {
        Self::ROTATION[index % Self::ROTATION.len()]
    }

    /// Computes the 64-byte digest of `data`.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            HashKind::Sha3_512 => Sha3_512::digest(data).to_vec(),
            HashKind::Blake2b512 => Blake2b512::digest(data).to_vec(),
            HashKind::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

/// Stage A: hashes `input` `iterations` times, rotating the algorithm by
/// iteration index.
///
/// Each digest's raw bytes are the message for the next round. With zero
/// iterations the input is returned unchanged.
///
/// # Parameters
/// - `input`: Initial message bytes (the UTF-8 encoding of the user string).
/// - `iterations`: Number of rounds to apply.
///
/// # Returns
/// The final digest, 64 bytes long whenever `iterations > 0`.
pub fn mixed_digest(input: &[u8], iterations: usize) -> Vec<u8> {
    let mut current = input.to_vec();
    for i in 0..iterations {
        let kind = HashKind::for_iteration(i);
        current = kind.digest(&current);
        trace!(iteration = i, ?kind, "mixed hash round");
    }
    current
}
