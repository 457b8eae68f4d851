//! Transform engine: stretches an input string into a fixed-length hex string.
//!
//! Pipeline:
//!
//! ```text
//! UTF-8 bytes ──► Stage A: SHA3-512 / BLAKE2b-512 / SHA-512 rotation (3..=10 rounds)
//!             ──► Stage B: base85 ──► base64 ──► hex
//!             ──► Stage C: SHAKE-256 chunks until `output_length` hex chars
//! ```
//!
//! Every call is independent and deterministic.

use crate::encoding::encode_cascade;
use crate::hashing::{mixed_digest, xof};
use tracing::debug;

/// Output length used when the caller does not choose one.
pub const DEFAULT_OUTPUT_LENGTH: usize = 1024;

/// Fewest Stage-A rounds, used for every output length below 300.
pub const MIN_ITERATIONS: usize = 3;

/// Most Stage-A rounds, used for every output length of 1000 or more.
pub const MAX_ITERATIONS: usize = 10;

/// Intermediate values recorded for one engine call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    /// Stage-A rounds performed.
    pub iterations: usize,
    /// Stage-A digest.
    pub digest: Vec<u8>,
    /// Stage-B output (ASCII lowercase hex).
    pub encoded: Vec<u8>,
    /// Final output.
    pub output: String,
}

/// Number of Stage-A rounds for a requested output length.
///
/// `output_length / 100`, clamped to `[3, 10]`.
///
/// # Examples
///
/// ```
/// use passtretcher::iteration_count;
///
/// assert_eq!(iteration_count(10), 3);
/// assert_eq!(iteration_count(550), 5);
/// assert_eq!(iteration_count(5000), 10);
/// ```
pub fn iteration_count(output_length: usize) -> usize {
    (output_length / 100).clamp(MIN_ITERATIONS, MAX_ITERATIONS)
}

/// Transforms `input` into `output_length` lowercase hex characters.
///
/// An empty input yields an empty string without hashing anything.
///
/// # Parameters
/// - `input`: The string to stretch.
/// - `output_length`: Exact number of characters to produce.
///
/// # Returns
/// A deterministic lowercase hex string of `output_length` characters, or
/// `""` when `input` is empty.
///
/// # Examples
///
/// ```
/// use passtretcher::transform;
///
/// assert_eq!(transform("hello", 10), "a4be34ee20");
/// assert_eq!(transform("", 10), "");
/// ```
pub fn transform(input: &str, output_length: usize) -> String {
    transform_traced(input, output_length).output
}

/// Runs the same pipeline as [`transform`] and keeps every stage's result.
///
/// For an empty input the returned transcript is empty (zero rounds).
///
/// # Examples
///
/// ```
/// use passtretcher::transform_traced;
///
/// let t = transform_traced("hello", 150);
/// assert_eq!(t.iterations, 3);
/// assert_eq!(t.digest.len(), 64);
/// assert_eq!(t.encoded.len(), 216);
/// assert_eq!(t.output.len(), 150);
/// ```
pub fn transform_traced(input: &str, output_length: usize) -> Transcript {
    if input.is_empty() {
        return Transcript::default();
    }

    let iterations = iteration_count(output_length);
    debug!(input_len = input.len(), output_length, iterations, "transforming");

    let digest = mixed_digest(input.as_bytes(), iterations);
    let encoded = encode_cascade(&digest);
    let output = xof::extend(&encoded, output_length);

    Transcript {
        iterations,
        digest,
        encoded,
        output,
    }
}
