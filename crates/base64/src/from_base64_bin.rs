//! Base64 decoding into a caller-sized byte slice.

use crate::constants::{DECODE_TABLE, PAD};
use crate::validate::validate;
use crate::FormatError;

/// Returns the number of bytes [`from_base64_bin`] writes for `encoded`.
///
/// Validates `encoded` first, so malformed text fails here too.
///
/// # Example
///
/// ```
/// use bintext_base64::decoded_size;
///
/// assert_eq!(decoded_size("TWFu").unwrap(), 3);
/// assert_eq!(decoded_size("TWE=").unwrap(), 2);
/// assert_eq!(decoded_size("TQ==").unwrap(), 1);
/// assert!(decoded_size("TQ=").is_err());
/// ```
pub fn decoded_size(encoded: &str) -> Result<usize, FormatError> {
    validate(encoded)?;

    let bytes = encoded.as_bytes();
    let size = bytes.len();
    let mut decoded = size / 4 * 3;

    if size > 0 && bytes[size - 1] == PAD {
        decoded -= 1;
        if bytes[size - 2] == PAD {
            decoded -= 1;
        }
    }

    Ok(decoded)
}

/// Decodes `encoded` into `dest`, returning the number of bytes written.
///
/// `encoded` is validated before anything is written; on error `dest` is left
/// untouched. `dest` must hold at least [`decoded_size`] bytes.
///
/// # Panics
///
/// Panics if `dest` is too small for the decoded output.
///
/// # Example
///
/// ```
/// use bintext_base64::{decoded_size, from_base64_bin};
///
/// let encoded = "TWFu";
/// let mut dest = vec![0u8; decoded_size(encoded).unwrap()];
/// let len = from_base64_bin(encoded, &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"Man");
/// ```
pub fn from_base64_bin(encoded: &str, dest: &mut [u8]) -> Result<usize, FormatError> {
    validate(encoded)?;

    let mut offset = 0;

    for group in encoded.as_bytes().chunks_exact(4) {
        // Pads decode to 0 here and only feed bytes that are skipped below.
        let sextet0 = sextet(group[0]);
        let sextet1 = sextet(group[1]);
        let sextet2 = sextet(group[2]);
        let sextet3 = sextet(group[3]);

        dest[offset] = (sextet0 << 2) | (sextet1 >> 4);
        offset += 1;

        if group[2] != PAD {
            dest[offset] = (sextet1 << 4) | (sextet2 >> 2);
            offset += 1;
        }

        if group[3] != PAD {
            dest[offset] = ((sextet2 << 6) & 0xc0) | sextet3;
            offset += 1;
        }
    }

    Ok(offset)
}

#[inline]
fn sextet(byte: u8) -> u8 {
    DECODE_TABLE[byte as usize].max(0) as u8
}
