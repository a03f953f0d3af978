//! Base64 encoding and decoding with strict validation.
//!
//! The codec works on caller-sized buffers: compute the required capacity with
//! [`encoded_size`] or [`decoded_size`], then write with [`to_base64_bin`] or
//! [`from_base64_bin`]. [`to_base64`] and [`from_base64`] wrap both steps and
//! return owned buffers.
//!
//! Decoding never guesses. Input whose length is not a multiple of 4, whose
//! padding is misplaced, or which contains a byte outside the alphabet is
//! rejected with a [`FormatError`] before anything is written.
//!
//! # Example
//!
//! ```
//! use bintext_base64::{from_base64, to_base64};
//!
//! let data = b"Man";
//! let encoded = to_base64(data);
//! assert_eq!(encoded, "TWFu");
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base64;
mod from_base64_bin;
mod to_base64;
mod to_base64_bin;
mod validate;

pub use constants::{ALPHABET, ALPHABET_BYTES, DECODE_TABLE, INVALID, PAD};
pub use from_base64::from_base64;
pub use from_base64_bin::{decoded_size, from_base64_bin};
pub use to_base64::to_base64;
pub use to_base64_bin::{encoded_size, to_base64_bin};
pub use validate::{is_valid, validate};

use thiserror::Error;

/// Malformed base64 text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The text length is not a multiple of 4.
    #[error("base64 size {size} is not evenly divisible by 4")]
    SizeNotMultipleOfFour { size: usize },
    /// A pad character appears before the last two positions.
    #[error("base64 '=' character may only appear in last two positions")]
    PadNotAtEnd,
    /// The second to last character is a pad but the last one is not.
    #[error("base64 last character must be '=' if second to last is")]
    PadIncomplete,
    /// A byte outside the alphabet, at a 0-based position.
    #[error("base64 invalid character found at position {position}")]
    InvalidCharacter { position: usize },
}
