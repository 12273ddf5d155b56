//! The hotel facade: check-in, check-out, listings, and file persistence.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use innkeep_rooms::{LoadReport, RoomRegistry};
use innkeep_stays::{BillingLedger, BookingRegistry, StayError};
use innkeep_types::{
    Codec, Guest, LedgerEntry, RoomNumber, RoomView, StayView, VacantRoom,
};

use crate::{HotelError, HotelSnapshot};

/// What a successful check-in assigned and charged.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInReceipt {
    pub room_number: RoomNumber,
    pub category: String,
    /// Amount posted to the guest's ledger entry for this stay.
    pub charged: f64,
    pub guest: Guest,
}

impl fmt::Display for CheckInReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room {} booked for {}", self.room_number, self.guest.name)
    }
}

/// Which room a check-out freed.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutReceipt {
    pub room_number: RoomNumber,
    pub guest: Guest,
}

impl fmt::Display for CheckOutReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has checked out", self.guest.name)
    }
}

/// A single hotel: its rooms, open bookings, and guest bills.
///
/// The three registries are private and only change together, one
/// operation at a time:
///
/// - a room is available exactly when no booking refers to it;
/// - every booking refers to one occupied room, and no room has two;
/// - ledger totals only grow.
#[derive(Debug, Default)]
pub struct Hotel {
    rooms: RoomRegistry,
    bookings: BookingRegistry,
    billing: BillingLedger,
}

impl Hotel {
    /// Creates a hotel with no rooms.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        rooms: RoomRegistry,
        bookings: BookingRegistry,
        billing: BillingLedger,
    ) -> Self {
        Self {
            rooms,
            bookings,
            billing,
        }
    }

    // -----------------------------------------------------------------------
    // Inventory
    // -----------------------------------------------------------------------

    /// Appends the rooms listed in a seed file.
    ///
    /// A malformed token ends the load early without failing it: rooms read
    /// before it are kept and the report says where reading stopped.
    ///
    /// # Errors
    /// [`HotelError::SourceUnreadable`] if the file cannot be opened or
    /// read. No rooms are added in that case.
    pub fn initialize(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, HotelError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| HotelError::unreadable(path, e))?;
        let report = self
            .rooms
            .load_reader(file)
            .map_err(|e| HotelError::unreadable(path, e))?;

        tracing::info!(
            path = %path.display(),
            loaded = report.loaded,
            rooms = self.rooms.len(),
            "system initialized"
        );
        Ok(report)
    }

    /// Appends the rooms listed in seed-format text.
    pub fn load_inventory(&mut self, input: &str) -> LoadReport {
        self.rooms.load_str(input)
    }

    /// Writes the current room states to `path`, replacing its contents.
    /// Returns the number of rooms written.
    ///
    /// The output has a fourth availability column, so it is a snapshot for
    /// people and other tools; [`initialize`](Self::initialize) cannot read
    /// it back. Use [`save_snapshot`](Self::save_snapshot) for a state that
    /// can be restored.
    ///
    /// # Errors
    /// [`HotelError::SourceUnreadable`] if the file cannot be created or
    /// written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize, HotelError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| HotelError::unreadable(path, e))?;
        let written = self
            .persist(BufWriter::new(file))
            .map_err(|e| HotelError::unreadable(path, e))?;

        tracing::info!(path = %path.display(), rooms = written, "current state saved");
        Ok(written)
    }

    /// Writes the current room states to any writer.
    pub fn persist<W: Write>(&self, out: W) -> io::Result<usize> {
        self.rooms.persist(out)
    }

    // -----------------------------------------------------------------------
    // Stays
    // -----------------------------------------------------------------------

    /// Puts `name` in the earliest-registered available room and charges
    /// that room's price to `name`.
    ///
    /// # Errors
    /// [`HotelError::NoRoomAvailable`] when every room is taken. The hotel
    /// is unchanged.
    pub fn check_in(
        &mut self,
        name: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<CheckInReceipt, HotelError> {
        let Some(index) = self.rooms.find_first_available() else {
            tracing::warn!(guest = name, "check-in refused: no available rooms");
            return Err(HotelError::NoRoomAvailable);
        };

        let room = self.rooms.occupy(index)?;
        let (room_number, category, price) = (room.number, room.category.clone(), room.price);

        let guest = Guest::new(name, check_in, check_out);
        if let Err(err) = self.bookings.open(index, guest.clone()) {
            // Undo the occupy so the room is not left taken with no stay.
            self.rooms.vacate(index)?;
            return Err(err.into());
        }
        let total = self.billing.add_charge(name, price);

        tracing::info!(
            guest = name,
            room = %room_number,
            charged = price,
            total,
            "room booked"
        );
        Ok(CheckInReceipt {
            room_number,
            category,
            charged: price,
            guest,
        })
    }

    /// Ends the oldest open stay under exactly `name` and frees its room.
    /// The guest's bill is left as it is.
    ///
    /// # Errors
    /// [`HotelError::BookingNotFound`] if no open booking has that name.
    /// The hotel is unchanged.
    pub fn check_out(&mut self, name: &str) -> Result<CheckOutReceipt, HotelError> {
        let Some(index) = self.bookings.find_by_guest(name).map(|b| b.room) else {
            tracing::warn!(guest = name, "check-out refused: no booking");
            return Err(HotelError::BookingNotFound(name.to_string()));
        };

        // Free the room first: if that fails the booking is still intact.
        let room_number = self.rooms.vacate(index)?.number;
        let booking = self
            .bookings
            .close_by_guest_name(name)
            .map_err(|err| match err {
                StayError::NotFound(name) => HotelError::BookingNotFound(name),
                other => other.into(),
            })?;

        tracing::info!(guest = name, room = %room_number, "guest checked out");
        Ok(CheckOutReceipt {
            room_number,
            guest: booking.guest,
        })
    }

    // -----------------------------------------------------------------------
    // Listings
    // -----------------------------------------------------------------------

    /// Every room, in registry order.
    pub fn rooms(&self) -> Vec<RoomView> {
        self.rooms.list()
    }

    /// Available rooms, in registry order.
    pub fn available_rooms(&self) -> Vec<VacantRoom> {
        self.rooms.list_available()
    }

    /// Open stays, oldest first.
    pub fn booked_rooms(&self) -> Vec<StayView> {
        self.bookings
            .list()
            .iter()
            .filter_map(|booking| {
                let room = self.rooms.get(booking.room)?;
                Some(StayView {
                    room_number: room.number,
                    guest: booking.guest.clone(),
                })
            })
            .collect()
    }

    /// Every guest's running total, sorted by name.
    pub fn billing(&self) -> Vec<LedgerEntry> {
        self.billing.list()
    }

    pub fn total_for(&self, name: &str) -> Option<f64> {
        self.billing.total_for(name)
    }

    pub fn room_registry(&self) -> &RoomRegistry {
        &self.rooms
    }

    pub fn booking_registry(&self) -> &BookingRegistry {
        &self.bookings
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    /// Captures rooms, open bookings, and the ledger.
    pub fn snapshot(&self) -> HotelSnapshot {
        HotelSnapshot::capture(&self.rooms, &self.bookings, &self.billing)
    }

    /// Encodes a full snapshot with `codec` and writes it to `path`.
    ///
    /// # Errors
    /// [`HotelError::Codec`] if encoding fails,
    /// [`HotelError::SourceUnreadable`] if the file cannot be written.
    pub fn save_snapshot<C: Codec>(
        &self,
        path: impl AsRef<Path>,
        codec: &C,
    ) -> Result<(), HotelError> {
        let path = path.as_ref();
        let bytes = codec.encode(&self.snapshot())?;
        std::fs::write(path, bytes).map_err(|e| HotelError::unreadable(path, e))?;

        tracing::info!(
            path = %path.display(),
            rooms = self.rooms.len(),
            bookings = self.bookings.len(),
            "snapshot saved"
        );
        Ok(())
    }

    /// Reads a snapshot written by [`save_snapshot`](Self::save_snapshot)
    /// and rebuilds the hotel it describes.
    ///
    /// # Errors
    /// [`HotelError::SourceUnreadable`], [`HotelError::Codec`], or
    /// [`HotelError::InconsistentSnapshot`] if the decoded state breaks a
    /// hotel invariant.
    pub fn load_snapshot<C: Codec>(path: impl AsRef<Path>, codec: &C) -> Result<Self, HotelError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| HotelError::unreadable(path, e))?;
        let snapshot: HotelSnapshot = codec.decode(&bytes)?;
        let hotel = snapshot.restore()?;

        tracing::info!(
            path = %path.display(),
            rooms = hotel.rooms.len(),
            bookings = hotel.bookings.len(),
            "snapshot loaded"
        );
        Ok(hotel)
    }
}
