//! SHAKE-256 length extension (Stage C).
//!
//! The first chunk is squeezed from the encoded seed; while the hex string is
//! still short, the next chunk is squeezed from the UTF-8 bytes of the hex
//! accumulated so far. Every chunk requests the same number of bytes.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use tracing::{debug, trace};

/// Squeezes `len` bytes of SHAKE-256 output over `data` and renders them as
/// lowercase hex (`2 * len` characters).
pub fn shake256_hex(data: &[u8], len: usize) -> String {
    let mut hasher = Shake256::default();
    hasher.update(data);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; len];
    reader.read(&mut out);
    hex::encode(out)
}

/// Number of XOF bytes requested per chunk for a given output length.
///
/// Half the output length, never less than one byte so that a one-character
/// request still terminates.
pub fn chunk_len(output_length: usize) -> usize {
    (output_length / 2).max(1)
}

/// Stretches `seed` into exactly `output_length` lowercase hex characters.
///
/// # Parameters
/// - `seed`: Stage-B output (ASCII hex digits).
/// - `output_length`: Exact number of characters to return.
///
/// # Returns
/// A lowercase hex string of length `output_length`.
///
/// # Examples
///
/// ```
/// use passtretcher::hashing::xof::extend;
///
/// let out = extend(b"seed", 11);
/// assert_eq!(out.len(), 11);
/// assert!(out.starts_with(&extend(b"seed", 10)));
/// ```
pub fn extend(seed: &[u8], output_length: usize) -> String {
    let chunk = chunk_len(output_length);
    debug!(output_length, chunk, "extending with shake256");

    let mut final_hash = shake256_hex(seed, chunk);
    while final_hash.len() < output_length {
        let extra = shake256_hex(final_hash.as_bytes(), chunk);
        final_hash.push_str(&extra);
        trace!(len = final_hash.len(), "appended xof chunk");
    }
    final_hash.truncate(output_length);
    final_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shake256_empty_message() {
        assert_eq!(shake256_hex(b"", 8), "46b9dd2b0ba88d13");
    }

    #[test]
    fn test_shake256_hex_length() {
        assert_eq!(shake256_hex(b"abc", 5).len(), 10);
        assert!(shake256_hex(b"abc", 0).is_empty());
    }

    #[test]
    fn test_chunk_len() {
        assert_eq!(chunk_len(0), 1);
        assert_eq!(chunk_len(1), 1);
        assert_eq!(chunk_len(2), 1);
        assert_eq!(chunk_len(11), 5);
        assert_eq!(chunk_len(1024), 512);
    }

    #[test]
    fn test_even_length_single_chunk() {
        assert_eq!(extend(b"seed", 10), "4fd6800b5d");
    }

    #[test]
    fn test_odd_length_needs_second_chunk() {
        assert_eq!(extend(b"seed", 11), "4fd6800b5d7");
    }

    #[test]
    fn test_tiny_lengths() {
        assert_eq!(extend(b"seed", 1), "4");
        assert_eq!(extend(b"seed", 3), "4f4");
        assert_eq!(extend(b"seed", 0), "");
    }

    #[test]
    fn test_exact_lengths() {
        for len in 0..64 {
            assert_eq!(extend(b"seed", len).len(), len, "length {}", len);
        }
    }
}
