//! Codec trait and implementations for structured hotel snapshots.
//!
//! The facade does not care how a snapshot becomes bytes; it only needs
//! something implementing [`Codec`]. [`JsonCodec`] is the one provided:
//! human-readable and easy to inspect or hand-edit.

use serde::{de::DeserializeOwned, Serialize};

use crate::CodecError;

/// Encodes values to bytes and decodes them back.
///
/// `DeserializeOwned` because decoded snapshots outlive the buffer they
/// were read from.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `CodecError::Encode` if the value cannot be represented.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `CodecError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError>;
}

/// A [`Codec`] that writes pretty-printed JSON (via `serde_json`).
///
/// Behind the `json` feature, enabled by default.
///
/// ```rust
/// use innkeep_types::{Codec, Guest, JsonCodec};
///
/// let codec = JsonCodec;
/// let guest = Guest::new("Alice", "2024-01-01", "2024-01-03");
///
/// let bytes = codec.encode(&guest).unwrap();
/// let decoded: Guest = codec.decode(&bytes).unwrap();
/// assert_eq!(guest, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec_pretty(value).map_err(CodecError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(data).map_err(CodecError::Decode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::{LedgerEntry, RoomNumber, StayView, Guest};

    #[test]
    fn test_json_output_is_readable() {
        let entry = LedgerEntry {
            name: "Alice".into(),
            total: 180.0,
        };
        let bytes = JsonCodec.encode(&entry).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"name\": \"Alice\""));
        assert!(text.contains("\"total\": 180.0"));
    }

    #[test]
    fn test_decode_nested_view() {
        let json = br#"{
            "room_number": 101,
            "guest": { "name": "Bob", "check_in": "a", "check_out": "b" }
        }"#;
        let stay: StayView = JsonCodec.decode(json).unwrap();
        assert_eq!(stay.room_number, RoomNumber(101));
        assert_eq!(stay.guest, Guest::new("Bob", "a", "b"));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let result: Result<StayView, _> = JsonCodec.decode(b"not json");
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_decode_missing_field_is_decode_error() {
        let result: Result<LedgerEntry, _> = JsonCodec.decode(br#"{"name": "Alice"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("decode failed"));
    }
}
