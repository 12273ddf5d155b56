//! Full hotel snapshots: rooms with their state, open bookings, and bills.
//!
//! Unlike the plain state file, a snapshot carries everything needed to
//! rebuild the hotel, and restoring one checks that the pieces agree with
//! each other before handing back a [`Hotel`].

use innkeep_rooms::{Room, RoomRegistry};
use innkeep_stays::{BillingLedger, Booking, BookingRegistry};
use innkeep_types::{CodecError, LedgerEntry};
use serde::{Deserialize, Serialize};

use crate::{Hotel, HotelError};

/// Format revision written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable image of a [`Hotel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSnapshot {
    pub version: u32,
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    pub billing: Vec<LedgerEntry>,
}

impl HotelSnapshot {
    pub(crate) fn capture(
        rooms: &RoomRegistry,
        bookings: &BookingRegistry,
        billing: &BillingLedger,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            rooms: rooms.rooms().to_vec(),
            bookings: bookings.list().to_vec(),
            billing: billing.list(),
        }
    }

    /// Rebuilds the hotel this snapshot describes.
    ///
    /// # Errors
    /// [`CodecError::UnsupportedVersion`] for another format revision, and
    /// [`HotelError::InconsistentSnapshot`] when:
    ///
    /// - a room price or ledger total is negative or not finite;
    /// - a booking names a room that does not exist or is available;
    /// - two bookings share a room;
    /// - an occupied room has no booking.
    pub fn restore(self) -> Result<Hotel, HotelError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(CodecError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            }
            .into());
        }

        if let Some(room) = self
            .rooms
            .iter()
            .find(|room| !room.price.is_finite() || room.price < 0.0)
        {
            return Err(inconsistent(format!(
                "room {} has invalid price {}",
                room.number, room.price
            )));
        }
        if let Some(entry) = self
            .billing
            .iter()
            .find(|entry| !entry.total.is_finite() || entry.total < 0.0)
        {
            return Err(inconsistent(format!(
                "bill for {} has invalid total {}",
                entry.name, entry.total
            )));
        }

        for booking in &self.bookings {
            match self.rooms.get(booking.room.0) {
                None => {
                    return Err(inconsistent(format!(
                        "booking for {} refers to missing room {}",
                        booking.guest.name, booking.room
                    )));
                }
                Some(room) if room.is_available() => {
                    return Err(inconsistent(format!(
                        "booking for {} refers to available room {}",
                        booking.guest.name, room.number
                    )));
                }
                Some(_) => {}
            }
        }

        let bookings = BookingRegistry::from_bookings(self.bookings)
            .map_err(|err| inconsistent(err.to_string()))?;

        // Each booking holds a distinct occupied room, so equal counts
        // mean every occupied room is accounted for.
        let occupied = self.rooms.iter().filter(|room| !room.is_available()).count();
        if occupied != bookings.len() {
            return Err(inconsistent(format!(
                "{occupied} occupied rooms but {} open bookings",
                bookings.len()
            )));
        }

        let rooms = RoomRegistry::from_rooms(self.rooms);
        let billing = self.billing.into_iter().collect::<BillingLedger>();
        Ok(Hotel::from_parts(rooms, bookings, billing))
    }
}

fn inconsistent(reason: String) -> HotelError {
    HotelError::InconsistentSnapshot(reason)
}
