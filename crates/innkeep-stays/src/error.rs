//! Error types for the stays layer.

use innkeep_types::RoomIndex;

/// Errors that can occur while opening or closing bookings.
#[derive(Debug, thiserror::Error)]
pub enum StayError {
    /// No open booking carries this guest name. Matching is exact and
    /// case-sensitive.
    #[error("no booking found for {0}")]
    NotFound(String),

    /// The room already has an open booking. A room holds at most one
    /// booking at a time.
    #[error("room {room} is already booked by {guest}")]
    RoomAlreadyBooked { room: RoomIndex, guest: String },
}
