//! Encoding scheme identifiers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A supported binary to text encoding scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum EncodeType {
    /// Standard base64 with `=` padding.
    Base64 = 0,
}

/// A raw scheme identifier that names no [`EncodeType`].
///
/// This signals a wiring defect, not bad input, so it is kept apart from
/// [`EncodeError`](crate::EncodeError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid encode type {0}")]
pub struct InvalidEncodeType(pub u32);

/// A scheme name that names no [`EncodeType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encode type '{0}'")]
pub struct UnknownEncodeName(pub String);

impl EncodeType {
    /// Every supported scheme.
    pub const ALL: [EncodeType; 1] = [EncodeType::Base64];

    /// Converts a raw identifier into a scheme.
    ///
    /// # Panics
    ///
    /// Panics with `invalid encode type N` if `value` is not a known scheme.
    /// Use [`EncodeType::try_from`] to handle the value instead.
    pub fn from_raw(value: u32) -> Self {
        match Self::try_from(value) {
            Ok(encode_type) => encode_type,
            Err(err) => panic!("{err}"),
        }
    }

    /// The raw identifier of this scheme.
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Lowercase scheme name.
    pub fn name(self) -> &'static str {
        match self {
            EncodeType::Base64 => "base64",
        }
    }
}

impl TryFrom<u32> for EncodeType {
    type Error = InvalidEncodeType;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EncodeType::Base64),
            other => Err(InvalidEncodeType(other)),
        }
    }
}

impl From<EncodeType> for u32 {
    fn from(encode_type: EncodeType) -> Self {
        encode_type.as_raw()
    }
}

impl fmt::Display for EncodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodeType {
    type Err = UnknownEncodeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|encode_type| encode_type.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownEncodeName(s.to_string()))
    }
}
