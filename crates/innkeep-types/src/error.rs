//! Error types for the inventory format and snapshot codecs.

use std::fmt;

/// Which field of an inventory record a token was meant to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Number,
    Category,
    Price,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "room number"),
            Self::Category => write!(f, "category"),
            Self::Price => write!(f, "price"),
        }
    }
}

/// Why inventory parsing stopped early.
///
/// Parsing never fails outright: the records read before the stop are
/// kept, and this value says where and why reading ended.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// A token was present but could not be read as the expected field.
    /// `position` is the zero-based token index in the input.
    #[error("token {position} ({token:?}) is not a valid {field}")]
    Malformed {
        position: usize,
        field: Field,
        token: String,
    },

    /// The input ended partway through a record. `record` is the
    /// zero-based index of the incomplete record.
    #[error("input ended inside record {record}, missing its {field}")]
    Truncated { record: usize, field: Field },
}

/// Errors from encoding or decoding a structured snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Malformed JSON, missing fields, or wrong types.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The document decoded, but was written by a format revision this
    /// build does not read.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}
