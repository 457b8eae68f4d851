//! Base85 encoder using the RFC 1924 alphabet.
//!
//! Produces the same output as git's binary-patch base85 and Python's
//! `base64.b85encode` without padding: input is taken in big-endian 4-byte
//! groups, each written as 5 digits, most significant first. A trailing group
//! of `n` bytes is zero-padded and contributes only its first `n + 1` digits.

/// RFC 1924 digit alphabet.
pub const ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Encodes `input` as base85 text bytes.
///
/// # Parameters
/// - `input`: Arbitrary bytes.
///
/// # Returns
/// ASCII digits from [`ALPHABET`]; `5 * len / 4` of them for inputs whose
/// length is a multiple of 4.
///
/// # Examples
///
/// ```
/// use passtretcher::encoding::base85::encode;
///
/// assert_eq!(encode(b"abcd"), b"VPa!s".to_vec());
/// assert_eq!(encode(b"ab"), b"VPX".to_vec());
/// ```
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len().div_ceil(4) * 5);
    for group in input.chunks(4) {
        let mut word = [0u8; 4];
        word[..group.len()].copy_from_slice(group);
        let mut value = u32::from_be_bytes(word);

        let mut digits = [0u8; 5];
        for digit in digits.iter_mut().rev() {
            *digit = ALPHABET[(value % 85) as usize];
            value /= 85;
        }
        output.extend_from_slice(&digits[..group.len() + 1]);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(encode(b"").is_empty());
    }

    #[test]
    fn test_partial_groups() {
        assert_eq!(encode(b"\x00"), b"00".to_vec());
        assert_eq!(encode(b"ab"), b"VPX".to_vec());
        assert_eq!(encode(b"abc"), b"VPaz".to_vec());
        assert_eq!(encode(b"abcde"), b"VPa!sWd".to_vec());
    }

    #[test]
    fn test_full_group_max_value() {
        assert_eq!(encode(&[0xFF; 4]), b"|NsC0".to_vec());
    }

    #[test]
    fn test_zero_group() {
        assert_eq!(encode(&[0u8; 4]), b"00000".to_vec());
    }

    #[test]
    fn test_digest_sized_input() {
        let encoded = encode(&[0xA5; 64]);
        assert_eq!(encoded.len(), 80);
        assert!(encoded.iter().all(|b| ALPHABET.contains(b)));
    }
}
