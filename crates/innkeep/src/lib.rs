//! # Innkeep
//!
//! Room inventory, guest check-in/check-out, and per-guest billing for a
//! small hotel.
//!
//! A [`Hotel`] owns three registries and keeps them consistent: the room
//! registry (who is free), the booking registry (who is where), and the
//! billing ledger (who owes what). Every operation either applies fully or
//! leaves all three untouched.
//!
//! For callers that share one hotel between tasks, [`HotelHandle`] runs the
//! hotel inside a Tokio task and processes one command at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use innkeep::prelude::*;
//!
//! let mut hotel = Hotel::new();
//! hotel.load_inventory("101 Standard 99.5\n102 Deluxe 150\n");
//!
//! let receipt = hotel.check_in("Alice", "2024-01-01", "2024-01-03")?;
//! assert_eq!(receipt.room_number, RoomNumber(101));
//!
//! hotel.check_out("Alice")?;
//! assert_eq!(hotel.billing()[0].to_string(), "Customer: Alice, Amount: $99.5");
//! # Ok::<(), HotelError>(())
//! ```

mod config;
mod error;
mod hotel;
mod service;
mod snapshot;
pub mod telemetry;

pub use config::HotelConfig;
pub use error::HotelError;
pub use hotel::{CheckInReceipt, CheckOutReceipt, Hotel};
pub use service::HotelHandle;
pub use snapshot::{HotelSnapshot, SNAPSHOT_VERSION};

pub mod prelude {
    pub use crate::{
        CheckInReceipt, CheckOutReceipt, Hotel, HotelConfig, HotelError, HotelHandle,
        HotelSnapshot,
    };
    pub use innkeep_rooms::{LoadReport, RoomState};
    pub use innkeep_types::{
        Codec, Guest, JsonCodec, LedgerEntry, RoomNumber, RoomView, StayView, VacantRoom,
    };
}
