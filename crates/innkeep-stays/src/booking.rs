//! The booking registry: every open stay, in the order it was opened.
//!
//! A [`Booking`] owns its [`Guest`] and points at its room by
//! [`RoomIndex`]. The room itself belongs to the room registry and lives
//! on after the booking is closed.
//!
//! Closing by name scans in insertion order and takes the first match, so
//! when two open stays share a name the older one closes first. The scan
//! is linear; a hotel's booking list is short.

use innkeep_types::{Guest, RoomIndex};
use serde::{Deserialize, Serialize};

use crate::StayError;

/// An open stay: one room, one guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub room: RoomIndex,
    pub guest: Guest,
}

/// Tracks all open bookings.
///
/// ## Lifecycle
///
/// ```text
/// open() ──→ [open booking] ──→ close_by_guest_name() ──→ (dropped)
/// ```
#[derive(Debug, Default)]
pub struct BookingRegistry {
    bookings: Vec<Booking>,
}

impl BookingRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from bookings in their original order.
    ///
    /// # Errors
    /// [`StayError::RoomAlreadyBooked`] if two bookings share a room.
    pub fn from_bookings(bookings: Vec<Booking>) -> Result<Self, StayError> {
        let mut registry = Self::new();
        for booking in bookings {
            registry.open(booking.room, booking.guest)?;
        }
        Ok(registry)
    }

    /// Opens a booking linking `room` to `guest`.
    ///
    /// The caller must already have marked the room occupied; this
    /// registry only guards against a second booking for the same room.
    ///
    /// # Errors
    /// [`StayError::RoomAlreadyBooked`] if `room` has an open booking.
    pub fn open(&mut self, room: RoomIndex, guest: Guest) -> Result<&Booking, StayError> {
        if let Some(existing) = self.find_by_room(room) {
            return Err(StayError::RoomAlreadyBooked {
                room,
                guest: existing.guest.name.clone(),
            });
        }

        tracing::debug!(%room, guest = %guest.name, "booking opened");
        self.bookings.push(Booking { room, guest });
        let last = self.bookings.len() - 1;
        Ok(&self.bookings[last])
    }

    /// Closes the oldest open booking whose guest name equals `name`
    /// exactly, and returns it. Its `room` is the index to free.
    ///
    /// # Errors
    /// [`StayError::NotFound`] if no open booking matches. Nothing is
    /// removed in that case.
    pub fn close_by_guest_name(&mut self, name: &str) -> Result<Booking, StayError> {
        let position = self
            .bookings
            .iter()
            .position(|booking| booking.guest.name == name)
            .ok_or_else(|| StayError::NotFound(name.to_string()))?;

        let booking = self.bookings.remove(position);
        tracing::debug!(room = %booking.room, guest = %booking.guest.name, "booking closed");
        Ok(booking)
    }

    /// Open bookings in insertion order.
    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn find_by_room(&self, room: RoomIndex) -> Option<&Booking> {
        self.bookings.iter().find(|booking| booking.room == room)
    }

    /// The oldest open booking under `name`.
    pub fn find_by_guest(&self, name: &str) -> Option<&Booking> {
        self.bookings.iter().find(|booking| booking.guest.name == name)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
