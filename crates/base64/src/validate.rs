//! Structural validation of base64 text.

use crate::constants::{DECODE_TABLE, INVALID, PAD};
use crate::FormatError;

/// Checks that `encoded` is well-formed padded base64.
///
/// The length must be a multiple of 4. Pad characters may only occupy the
/// last two positions, and a pad in the second to last position requires a
/// pad in the last one. Every other byte must belong to the alphabet; the
/// first one that does not is reported by its 0-based position.
///
/// The empty string is valid and decodes to nothing.
///
/// # Example
///
/// ```
/// use bintext_base64::{validate, FormatError};
///
/// assert!(validate("TWE=").is_ok());
/// assert_eq!(
///     validate("QQ Q"),
///     Err(FormatError::InvalidCharacter { position: 2 })
/// );
/// ```
pub fn validate(encoded: &str) -> Result<(), FormatError> {
    let bytes = encoded.as_bytes();
    let size = bytes.len();

    if size % 4 != 0 {
        return Err(FormatError::SizeNotMultipleOfFour { size });
    }

    for (position, &byte) in bytes.iter().enumerate() {
        if byte == PAD {
            if position < size - 2 {
                return Err(FormatError::PadNotAtEnd);
            }
            if position == size - 2 && bytes[size - 1] != PAD {
                return Err(FormatError::PadIncomplete);
            }
        } else if DECODE_TABLE[byte as usize] == INVALID {
            return Err(FormatError::InvalidCharacter { position });
        }
    }

    Ok(())
}

/// Returns `true` if [`validate`] accepts `encoded`.
pub fn is_valid(encoded: &str) -> bool {
    validate(encoded).is_ok()
}
