//! Identity newtypes and the read-only views handed back to callers.
//!
//! Views are plain owned snapshots: a caller holding a [`RoomView`] holds
//! no reference into the registry, so the registry stays free to mutate.
//! Each view's `Display` renders the line the front desk prints.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// The number painted on a room door.
///
/// Supplied by whoever writes the inventory file. Uniqueness is not
/// enforced: two rooms may carry the same number, and every lookup by
/// number resolves to the first one in registry order.
///
/// `#[serde(transparent)]` keeps it a bare integer in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(pub i32);

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a room inside the room registry.
///
/// The registry is append-only, so an index handed out once stays valid
/// and keeps naming the same room for the rest of the run. Bookings hold
/// one of these instead of a reference to the room.
///
/// Ordering follows insertion order, which is what first-fit room
/// selection relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomIndex(pub usize);

impl fmt::Display for RoomIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Guest
// ---------------------------------------------------------------------------

/// A guest record, created at check-in and dropped at check-out.
///
/// The dates are opaque labels: they are stored and shown, never parsed.
/// The name is the guest's only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub check_in: String,
    pub check_out: String,
}

impl Guest {
    pub fn new(
        name: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            check_in: check_in.into(),
            check_out: check_out.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Listing views
// ---------------------------------------------------------------------------

/// One row of the full room listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomView {
    pub number: RoomNumber,
    pub category: String,
    pub price: f64,
    pub available: bool,
}

impl fmt::Display for RoomView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room Number: {}, Type: {}, Price: ${}, Available: {}",
            self.number,
            self.category,
            self.price,
            if self.available { "Yes" } else { "No" }
        )
    }
}

/// One row of the vacancy listing. Same room data, no availability column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacantRoom {
    pub number: RoomNumber,
    pub category: String,
    pub price: f64,
}

impl fmt::Display for VacantRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room Number: {}, Type: {}, Price: ${}",
            self.number, self.category, self.price
        )
    }
}

/// One open stay: which room, and who is in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayView {
    pub room_number: RoomNumber,
    pub guest: Guest,
}

impl fmt::Display for StayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room Number: {}, Customer: {}, Check-in: {}, Check-out: {}",
            self.room_number, self.guest.name, self.guest.check_in, self.guest.check_out
        )
    }
}

/// A guest's running total in the billing ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub name: String,
    pub total: f64,
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer: {}, Amount: ${}", self.name, self.total)
    }
}
