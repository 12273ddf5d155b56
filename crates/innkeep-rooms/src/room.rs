//! A single room record.

use innkeep_types::{RoomNumber, RoomSpec, RoomView, StateLine, VacantRoom};
use serde::{Deserialize, Serialize};

use crate::RoomState;

/// A room owned by the [`RoomRegistry`](crate::RoomRegistry).
///
/// Number, category, and price are fixed at creation. Only the state
/// changes, and only through the registry so its vacancy index stays in
/// sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub number: RoomNumber,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub(crate) state: RoomState,
}

impl Room {
    /// Creates an available room.
    pub fn new(number: RoomNumber, category: impl Into<String>, price: f64) -> Self {
        Self {
            number,
            category: category.into(),
            price,
            state: RoomState::Available,
        }
    }

    /// Creates a room in the given state. Used when rebuilding a registry
    /// from a snapshot.
    pub fn with_state(
        number: RoomNumber,
        category: impl Into<String>,
        price: f64,
        state: RoomState,
    ) -> Self {
        Self {
            state,
            ..Self::new(number, category, price)
        }
    }

    pub fn state(&self) -> RoomState {
        self.state
    }

    pub fn is_available(&self) -> bool {
        self.state.is_available()
    }

    pub fn view(&self) -> RoomView {
        RoomView {
            number: self.number,
            category: self.category.clone(),
            price: self.price,
            available: self.is_available(),
        }
    }

    pub fn vacancy(&self) -> VacantRoom {
        VacantRoom {
            number: self.number,
            category: self.category.clone(),
            price: self.price,
        }
    }

    pub fn state_line(&self) -> StateLine<'_> {
        StateLine {
            number: self.number,
            category: &self.category,
            price: self.price,
            available: self.is_available(),
        }
    }
}

impl From<RoomSpec> for Room {
    fn from(spec: RoomSpec) -> Self {
        Self::new(spec.number, spec.category, spec.price)
    }
}
