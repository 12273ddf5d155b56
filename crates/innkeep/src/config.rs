//! Hotel configuration: where files live and how the service is sized.

use std::path::{Path, PathBuf};

use innkeep_types::{Codec, JsonCodec};
use serde::{Deserialize, Serialize};

use crate::HotelError;

/// Settings for a hotel deployment.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "inventory_path": "rooms/spring.txt", "channel_size": 16 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// Seed file read by Initialize.
    pub inventory_path: PathBuf,

    /// Destination of the plain state file written by Save.
    pub state_path: PathBuf,

    /// Destination of full snapshots.
    pub snapshot_path: PathBuf,

    /// Command queue depth for [`HotelHandle`](crate::HotelHandle).
    /// Senders wait when the queue is full.
    pub channel_size: usize,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from("initial_data.txt"),
            state_path: PathBuf::from("current_state.txt"),
            snapshot_path: PathBuf::from("hotel_snapshot.json"),
            channel_size: 64,
        }
    }
}

impl HotelConfig {
    /// Reads a JSON config file, filling missing keys from the defaults.
    ///
    /// # Errors
    /// [`HotelError::SourceUnreadable`] if the file cannot be read,
    /// [`HotelError::Codec`] if it is not a valid config document.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, HotelError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| HotelError::unreadable(path, e))?;
        let config: Self = JsonCodec.decode(&bytes)?;
        Ok(config.validated())
    }

    /// Fixes out-of-range values so the config is safe to use.
    ///
    /// - `channel_size` 0 is raised to 1 (Tokio rejects empty channels).
    pub fn validated(mut self) -> Self {
        if self.channel_size == 0 {
            tracing::warn!("channel_size must be at least 1, raising to 1");
            self.channel_size = 1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = HotelConfig::default();
        assert_eq!(config.inventory_path, PathBuf::from("initial_data.txt"));
        assert_eq!(config.state_path, PathBuf::from("current_state.txt"));
        assert_eq!(config.channel_size, 64);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config: HotelConfig = JsonCodec.decode(br#"{"channel_size": 8}"#).unwrap();
        assert_eq!(config.channel_size, 8);
        assert_eq!(config.inventory_path, PathBuf::from("initial_data.txt"));
    }

    #[test]
    fn test_validated_raises_zero_channel() {
        let config = HotelConfig {
            channel_size: 0,
            ..HotelConfig::default()
        }
        .validated();
        assert_eq!(config.channel_size, 1);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = HotelConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, HotelError::SourceUnreadable { .. }));
    }
}
