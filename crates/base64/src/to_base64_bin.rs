//! Base64 encoding into a caller-sized byte slice.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Returns the number of bytes [`to_base64_bin`] writes for `source_size`
/// input bytes, not counting the terminator.
///
/// # Example
///
/// ```
/// use bintext_base64::encoded_size;
///
/// assert_eq!(encoded_size(0), 0);
/// assert_eq!(encoded_size(1), 4);
/// assert_eq!(encoded_size(3), 4);
/// assert_eq!(encoded_size(4), 8);
/// ```
pub fn encoded_size(source_size: usize) -> usize {
    source_size.div_ceil(3) * 4
}

/// Encodes `source` into `dest` using standard base64 with padding.
///
/// `dest` must hold at least [`encoded_size`] bytes. When it has room for one
/// more byte, a NUL terminator is written after the text. Returns the length
/// of the text, excluding the terminator.
///
/// # Panics
///
/// Panics if `dest` is shorter than `encoded_size(source.len())`.
///
/// # Example
///
/// ```
/// use bintext_base64::{encoded_size, to_base64_bin};
///
/// let data = b"Ma";
/// let mut dest = vec![0u8; encoded_size(data.len()) + 1];
/// let len = to_base64_bin(data, &mut dest);
/// assert_eq!(&dest[..len], b"TWE=");
/// assert_eq!(dest[len], 0);
/// ```
pub fn to_base64_bin(source: &[u8], dest: &mut [u8]) -> usize {
    let length = source.len();
    let required = encoded_size(length);
    assert!(
        dest.len() >= required,
        "base64 destination holds {} bytes, {} required",
        dest.len(),
        required
    );

    let extra_length = length % 3;
    let base_length = length - extra_length;
    let mut offset = 0;

    for group in source[..base_length].chunks_exact(3) {
        let (o1, o2, o3) = (group[0], group[1], group[2]);
        dest[offset] = ALPHABET_BYTES[(o1 >> 2) as usize];
        dest[offset + 1] = ALPHABET_BYTES[(((o1 & 0x03) << 4) | ((o2 & 0xf0) >> 4)) as usize];
        dest[offset + 2] = ALPHABET_BYTES[(((o2 & 0x0f) << 2) | ((o3 & 0xc0) >> 6)) as usize];
        dest[offset + 3] = ALPHABET_BYTES[(o3 & 0x3f) as usize];
        offset += 4;
    }

    if extra_length == 1 {
        let o1 = source[base_length];
        dest[offset] = ALPHABET_BYTES[(o1 >> 2) as usize];
        dest[offset + 1] = ALPHABET_BYTES[((o1 & 0x03) << 4) as usize];
        dest[offset + 2] = PAD;
        dest[offset + 3] = PAD;
        offset += 4;
    } else if extra_length == 2 {
        let o1 = source[base_length];
        let o2 = source[base_length + 1];
        dest[offset] = ALPHABET_BYTES[(o1 >> 2) as usize];
        dest[offset + 1] = ALPHABET_BYTES[(((o1 & 0x03) << 4) | ((o2 & 0xf0) >> 4)) as usize];
        dest[offset + 2] = ALPHABET_BYTES[((o2 & 0x0f) << 2) as usize];
        dest[offset + 3] = PAD;
        offset += 4;
    }

    if let Some(terminator) = dest.get_mut(offset) {
        *terminator = 0;
    }

    offset
}
