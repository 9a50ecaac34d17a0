//! Base64 coder for the jetpad base utilities.
//!
//! Rust port of the Java `jetpad` base64 coder. The alphabet is the standard
//! one except for the last two symbols: `+` is 62 and `-` is 63 (no `/`).
//! Two encodings are provided:
//! - Byte sequences to padded base64 strings and back, in 4-character groups.
//! - Unsigned 64-bit integers to compact unpadded base-64 numerals and back,
//!   most-significant digit first.
//!
//! # Example
//!
//! ```
//! use jetpad_base64::{to_base64, from_base64, to_base64_num, from_base64_num};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//!
//! assert_eq!(to_base64_num(0), "A");
//! assert_eq!(from_base64_num("BA").unwrap(), 64);
//! ```

mod constants;
mod from_base64;
mod from_base64_num;
mod to_base64;
mod to_base64_num;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::from_base64;
pub use from_base64_num::from_base64_num;
pub use to_base64::to_base64;
pub use to_base64_num::to_base64_num;

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// The input contains a character outside the 64-symbol alphabet.
    #[error("unknown character '{0}'")]
    UnknownCharacter(char),
    /// The decoded integer would set the top bit of the accumulator.
    #[error("integer overflow")]
    Overflow,
    /// The base64 string length must be a multiple of 4.
    #[error("base64 string length must be a multiple of 4")]
    InvalidLength,
}
