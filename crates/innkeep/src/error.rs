//! Unified error type for the hotel facade.

use std::io;
use std::path::PathBuf;

use innkeep_rooms::RoomError;
use innkeep_stays::StayError;
use innkeep_types::CodecError;

/// Top-level error for every hotel operation.
///
/// The first three variants are the outcomes callers are expected to
/// branch on. The `#[from]` wrappers carry lower-layer errors through `?`.
/// None of them leave the hotel half-changed.
#[derive(Debug, thiserror::Error)]
pub enum HotelError {
    /// A file to load from or save to could not be opened, read, or
    /// written.
    #[error("unable to open file {}: {source}", .path.display())]
    SourceUnreadable { path: PathBuf, source: io::Error },

    /// Check-in found every room occupied (or no rooms at all).
    #[error("no available rooms for booking")]
    NoRoomAvailable,

    /// Check-out found no open booking under this exact name.
    #[error("no booking found for {0}")]
    BookingNotFound(String),

    /// A decoded snapshot describes a state the hotel could never be in.
    #[error("inconsistent snapshot: {0}")]
    InconsistentSnapshot(String),

    /// The hotel service task has stopped.
    #[error("hotel service is unavailable")]
    Unavailable,

    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    Stay(#[from] StayError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl HotelError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }
}
