//! Integer decoding.

use crate::constants::sextet;
use crate::Base64Error;

/// Decodes a base-64 numeral produced by [`to_base64_num`](crate::to_base64_num).
///
/// Digits are consumed left to right into a shift-and-add accumulator. Any
/// state that sets bit 63 of the accumulator is rejected, so the decodable
/// range is `[0, 2^63)` even though encoding covers the full `u64` range.
/// The empty string decodes to 0.
///
/// # Errors
///
/// [`Base64Error::UnknownCharacter`] for any character outside the
/// 64-symbol alphabet (`=` included); [`Base64Error::Overflow`] when the
/// accumulated value would set the top bit.
///
/// # Example
///
/// ```
/// use jetpad_base64::from_base64_num;
///
/// assert_eq!(from_base64_num("A").unwrap(), 0);
/// assert_eq!(from_base64_num("BA").unwrap(), 64);
/// ```
pub fn from_base64_num(encoded: &str) -> Result<u64, Base64Error> {
    let mut acc: u64 = 0;
    for ch in encoded.chars() {
        let value = sextet(ch);
        if value < 0 {
            return Err(Base64Error::UnknownCharacter(ch));
        }
        acc = (acc << 6) + value as u64;
        if acc >> 63 != 0 {
            return Err(Base64Error::Overflow);
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(from_base64_num("A").unwrap(), 0);
        assert_eq!(from_base64_num("AA").unwrap(), 0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(from_base64_num("").unwrap(), 0);
    }

    #[test]
    fn test_values() {
        assert_eq!(from_base64_num("B").unwrap(), 1);
        assert_eq!(from_base64_num("-").unwrap(), 63);
        assert_eq!(from_base64_num("BA").unwrap(), 64);
        assert_eq!(from_base64_num("--").unwrap(), 4095);
    }

    #[test]
    fn test_unknown_character() {
        assert!(matches!(
            from_base64_num("/"),
            Err(Base64Error::UnknownCharacter('/'))
        ));
        assert!(matches!(
            from_base64_num("="),
            Err(Base64Error::UnknownCharacter('='))
        ));
        assert!(matches!(
            from_base64_num("B C"),
            Err(Base64Error::UnknownCharacter(' '))
        ));
    }

    #[test]
    fn test_overflow_boundary() {
        // 2^63 - 1 is the largest decodable value.
        assert_eq!(from_base64_num("H----------").unwrap(), (1 << 63) - 1);
        assert!(matches!(
            from_base64_num("IAAAAAAAAAA"),
            Err(Base64Error::Overflow)
        ));
        assert!(matches!(
            from_base64_num("P----------"),
            Err(Base64Error::Overflow)
        ));
    }
}
