//! Room occupancy state machine.

use serde::{Deserialize, Serialize};

/// The occupancy state of a room.
///
/// Exactly two transitions exist:
///
/// ```text
///   Available ──(check-in)──→ Occupied
///       ↑                        │
///       └──────(check-out)───────┘
/// ```
///
/// Every room starts `Available`. Nothing else moves a room between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomState {
    #[default]
    Available,
    Occupied,
}

impl RoomState {
    /// Returns `true` if the room can take a new guest.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// The state this one flips to.
    pub fn next(self) -> Self {
        match self {
            Self::Available => Self::Occupied,
            Self::Occupied => Self::Available,
        }
    }

    /// Returns `true` if moving to `target` is one of the two valid
    /// transitions. Staying in place is not a transition.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == target
    }
}

impl std::fmt::Display for RoomState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Occupied => write!(f, "Occupied"),
        }
    }
}
