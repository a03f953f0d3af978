//! Standard base64 decoding into an owned buffer.

use crate::from_base64_bin::{decoded_size, from_base64_bin};
use crate::FormatError;

/// Decodes a padded base64 string.
///
/// # Example
///
/// ```
/// use bintext_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert!(from_base64("aGVsbG8").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, FormatError> {
    let mut buf = vec![0u8; decoded_size(encoded)?];
    let length = from_base64_bin(encoded, &mut buf)?;
    buf.truncate(length);
    Ok(buf)
}
