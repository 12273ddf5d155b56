//! Error types for the room layer.

use innkeep_types::{RoomIndex, RoomNumber};

use crate::RoomState;

/// Errors that can occur during room operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// No room lives at this index.
    #[error("no room at index {0}")]
    UnknownIndex(RoomIndex),

    /// The room is not in a state that allows this change.
    /// For example, occupying a room that is already occupied.
    #[error("room {number} cannot move from {from} to {to}")]
    InvalidTransition {
        number: RoomNumber,
        from: RoomState,
        to: RoomState,
    },
}
