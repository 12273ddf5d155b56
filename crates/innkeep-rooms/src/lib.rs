//! Room inventory for Innkeep.
//!
//! Rooms live in an append-only arena: once a room is registered its
//! [`RoomIndex`](innkeep_types::RoomIndex) never changes, so other layers
//! refer to rooms by index rather than by reference.
//!
//! # Key types
//!
//! - [`RoomRegistry`] — loads, lists, and transitions rooms
//! - [`Room`] — one room and its current [`RoomState`]
//! - [`RoomState`] — occupancy state machine (`Available` ⇄ `Occupied`)
//! - [`LoadReport`] — what a bulk load read, and why it stopped

mod error;
mod registry;
mod room;
mod state;

pub use error::RoomError;
pub use registry::{LoadReport, RoomRegistry};
pub use room::Room;
pub use state::RoomState;
