//! Binary to text encoding dispatch.
//!
//! Every entry point takes an [`EncodeType`] first and forwards to the codec
//! for that scheme. Sizing follows a two-call contract: ask for the required
//! capacity, allocate, then write.
//!
//! ```
//! use bintext_encode::{decode_to_bin, decode_to_bin_size, encode_to_str, encode_to_str_size, EncodeType};
//!
//! let source = b"Man";
//! let mut text = vec![0u8; encode_to_str_size(EncodeType::Base64, source.len())];
//! let len = encode_to_str(EncodeType::Base64, source, &mut text);
//! assert_eq!(&text[..len], b"TWFu");
//!
//! let encoded = std::str::from_utf8(&text[..len]).unwrap();
//! let mut bin = vec![0u8; decode_to_bin_size(EncodeType::Base64, encoded).unwrap()];
//! decode_to_bin(EncodeType::Base64, encoded, &mut bin).unwrap();
//! assert_eq!(bin, source);
//! ```

pub mod cli;
mod encode_type;

pub use bintext_base64::FormatError;
pub use encode_type::{EncodeType, InvalidEncodeType, UnknownEncodeName};

use thiserror::Error;
use tracing::{debug, trace};

/// Errors returned by the decode entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// The encoded text is malformed for the requested scheme.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Encodes `source` into `destination` and returns the text length.
///
/// Size `destination` with [`encode_to_str_size`]; one extra byte gets a NUL
/// terminator.
///
/// # Panics
///
/// Panics if `destination` is smaller than [`encode_to_str_size`].
pub fn encode_to_str(encode_type: EncodeType, source: &[u8], destination: &mut [u8]) -> usize {
    trace!(%encode_type, source_size = source.len(), "encode");
    match encode_type {
        EncodeType::Base64 => bintext_base64::to_base64_bin(source, destination),
    }
}

/// Length of the text [`encode_to_str`] produces for `source_size` bytes.
pub fn encode_to_str_size(encode_type: EncodeType, source_size: usize) -> usize {
    match encode_type {
        EncodeType::Base64 => bintext_base64::encoded_size(source_size),
    }
}

/// Decodes `source` into `destination` and returns the number of bytes written.
///
/// `source` is validated first and nothing is written when it is malformed.
///
/// # Panics
///
/// Panics if `destination` is smaller than [`decode_to_bin_size`].
pub fn decode_to_bin(
    encode_type: EncodeType,
    source: &str,
    destination: &mut [u8],
) -> Result<usize, EncodeError> {
    trace!(%encode_type, source_size = source.len(), "decode");
    let written = match encode_type {
        EncodeType::Base64 => bintext_base64::from_base64_bin(source, destination),
    }
    .inspect_err(|err| debug!(%encode_type, %err, "decode rejected"))?;
    Ok(written)
}

/// Number of bytes [`decode_to_bin`] writes for `source`.
///
/// Validates `source`, so malformed text fails here as well.
pub fn decode_to_bin_size(encode_type: EncodeType, source: &str) -> Result<usize, EncodeError> {
    let size = match encode_type {
        EncodeType::Base64 => bintext_base64::decoded_size(source),
    }
    .inspect_err(|err| debug!(%encode_type, %err, "decode size rejected"))?;
    Ok(size)
}

/// Returns whether `source` is well-formed text for `encode_type`.
///
/// Format errors become `Ok(false)`; any other error is returned as is.
pub fn decode_to_bin_valid(encode_type: EncodeType, source: &str) -> Result<bool, EncodeError> {
    match decode_to_bin_validate(encode_type, source) {
        Ok(()) => Ok(true),
        Err(EncodeError::Format(_)) => Ok(false),
        #[allow(unreachable_patterns)]
        Err(err) => Err(err),
    }
}

/// Fails with a descriptive [`EncodeError::Format`] if `source` is malformed.
pub fn decode_to_bin_validate(encode_type: EncodeType, source: &str) -> Result<(), EncodeError> {
    match encode_type {
        EncodeType::Base64 => bintext_base64::validate(source),
    }
    .inspect_err(|err| debug!(%encode_type, %err, "validation rejected"))?;
    Ok(())
}

/// Encodes `source` into an owned string.
pub fn encode_to_string(encode_type: EncodeType, source: &[u8]) -> String {
    let mut buf = vec![0u8; encode_to_str_size(encode_type, source.len())];
    let length = encode_to_str(encode_type, source, &mut buf);
    buf.truncate(length);
    buf.into_iter().map(char::from).collect()
}

/// Decodes `source` into an owned buffer.
pub fn decode_to_vec(encode_type: EncodeType, source: &str) -> Result<Vec<u8>, EncodeError> {
    let mut buf = vec![0u8; decode_to_bin_size(encode_type, source)?];
    let length = decode_to_bin(encode_type, source, &mut buf)?;
    buf.truncate(length);
    Ok(buf)
}
