//! Standard base64 encoding into an owned string.

use crate::to_base64_bin::{encoded_size, to_base64_bin};

/// Encodes a byte slice to a standard base64 string.
///
/// # Example
///
/// ```
/// use bintext_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let mut buf = vec![0u8; encoded_size(uint8.len())];
    let length = to_base64_bin(uint8, &mut buf);
    buf.truncate(length);
    // Every byte written comes from the ASCII alphabet or is a pad.
    buf.into_iter().map(char::from).collect()
}
