//! Encoding cascade (Stage B).
//!
//! The Stage-A digest is layered through base85, base64 and hex, in that
//! order. The result is always ASCII lowercase hex digits.

pub mod base85;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

/// One binary-to-text encoding step of the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// RFC 1924 base85, unpadded.
    Base85,
    /// Standard base64 with `=` padding.
    Base64,
    /// Lowercase hexadecimal.
    Hex,
}

impl Encoding {
    /// Fixed order in which the cascade applies the encodings.
    pub const CASCADE: [Encoding; 3] = [Encoding::Base85, Encoding::Base64, Encoding::Hex];

    /// Encodes `input`, returning the text form as bytes.
    pub fn apply(self, input: &[u8]) -> Vec<u8> {
        match self {
            Encoding::Base85 => base85::encode(input),
            // Carried through its `String` form so the next step sees UTF-8 text.
            Encoding::Base64 => STANDARD.encode(input).into_bytes(),
            Encoding::Hex => hex::encode(input).into_bytes(),
        }
    }
}

/// Applies every step of [`Encoding::CASCADE`] to `input`.
///
/// # Examples
///
/// ```
/// use passtretcher::encoding::encode_cascade;
///
/// assert_eq!(encode_cascade(b"abc"), b"566c426865673d3d".to_vec());
/// ```
pub fn encode_cascade(input: &[u8]) -> Vec<u8> {
    Encoding::CASCADE.iter().fold(input.to_vec(), |current, step| {
        let next = step.apply(&current);
        trace!(?step, from = current.len(), to = next.len(), "encoding step");
        next
    })
}
