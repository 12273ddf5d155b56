//! Guest stays and billing for Innkeep.
//!
//! This crate tracks who is staying where and what they owe:
//!
//! 1. **Bookings** — open links between a room and a guest
//!    ([`BookingRegistry`], [`Booking`])
//! 2. **Billing** — a running total per guest name that outlives the stay
//!    ([`BillingLedger`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Facade (above)  ← keeps rooms, bookings, and bills consistent
//!     ↕
//! Stays (this crate)  ← bookings refer to rooms by RoomIndex only
//!     ↕
//! Types (below)  ← Guest, RoomIndex, LedgerEntry
//! ```
//!
//! Neither registry looks at room state. Keeping a room's availability in
//! step with its booking is the facade's job.

mod booking;
mod error;
mod ledger;

pub use booking::{Booking, BookingRegistry};
pub use error::StayError;
pub use ledger::BillingLedger;
