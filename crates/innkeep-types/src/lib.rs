//! Shared vocabulary for Innkeep.
//!
//! This crate defines the pieces every other layer speaks in:
//!
//! - **Types** ([`RoomNumber`], [`RoomIndex`], [`Guest`], and the listing
//!   views) — the records that flow from the registries back to callers.
//! - **Inventory format** ([`parse_inventory`], [`StateLine`]) — the flat
//!   whitespace-separated text the hotel is seeded from and saved to.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how structured snapshots
//!   are converted to and from bytes.
//! - **Errors** ([`FormatError`], [`CodecError`]).
//!
//! It knows nothing about room state or bookings; those live in
//! `innkeep-rooms` and `innkeep-stays`.
//!
//! ```text
//! Facade (innkeep) → Registries (rooms, stays) → Types (this crate)
//! ```

mod codec;
mod error;
mod inventory;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::{CodecError, Field, FormatError};
pub use inventory::{parse_inventory, ParsedInventory, RoomSpec, StateLine};
pub use types::{Guest, LedgerEntry, RoomIndex, RoomNumber, RoomView, StayView, VacantRoom};
