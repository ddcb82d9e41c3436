//! Seat assignment.
//!
//! Holds the canonical slot state and applies move transitions to it. The
//! pool of unassigned athletes is always derived from the slot state.

pub mod pool;
pub mod resize;
pub mod state;
pub mod transition;

pub use pool::{derive_pool, in_pool};
pub use state::{AssignmentState, SeatSlots, SlotAddr, SlotRef, StateError, Tier};
pub use transition::{move_athlete, try_move_athlete, AssignError, Destination, MoveOutcome};
