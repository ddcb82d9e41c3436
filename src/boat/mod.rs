//! Boat representation.
//!
//! Seats, layouts, athletes, and the flattened lineup view that the balance
//! engine consumes.

pub mod athlete;
pub mod layout;
pub mod lineup;
pub mod seat;

pub use athlete::{Athlete, AthleteId, Roster};
pub use layout::{
    generate_layout, layout_id, BoatLayout, LayoutParams, DEFAULT_ROW_SPACING, MAX_ROWS,
};
pub use lineup::{Assignment, Lineup};
pub use seat::{Seat, SeatKey, Side, ALTERNATE_COUNT};
