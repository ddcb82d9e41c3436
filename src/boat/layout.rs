//! Seat layout generation.
//!
//! Builds the geometric model of a boat: paired paddling seats per row,
//! centered on `x = 0`, plus optional drummer and steer seats one row
//! spacing beyond the bow-most and stern-most rows.

use serde::{Deserialize, Serialize};

use super::seat::{Seat, SeatKey, Side};

/// Upper bound on rows accepted by [`LayoutParams::clamped`].
pub const MAX_ROWS: usize = 30;

/// Row spacing used when the caller supplies an unusable value.
pub const DEFAULT_ROW_SPACING: f64 = 1.0;

/// Inputs to [`generate_layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub num_rows: usize,
    pub row_spacing: f64,
    pub include_drummer: bool,
    pub include_steer: bool,
}

impl LayoutParams {
    /// A standard 20-paddler boat.
    pub const fn standard() -> Self {
        LayoutParams {
            num_rows: 10,
            row_spacing: DEFAULT_ROW_SPACING,
            include_drummer: true,
            include_steer: true,
        }
    }

    /// A small 10-paddler boat.
    pub const fn small() -> Self {
        LayoutParams {
            num_rows: 5,
            ..LayoutParams::standard()
        }
    }

    /// Returns a copy with rows clamped into `1..=MAX_ROWS` and a positive,
    /// finite row spacing.
    pub fn clamped(self) -> Self {
        let row_spacing = if self.row_spacing.is_finite() && self.row_spacing > 0.0 {
            self.row_spacing
        } else {
            DEFAULT_ROW_SPACING
        };
        LayoutParams {
            num_rows: self.num_rows.clamp(1, MAX_ROWS),
            row_spacing,
            ..self
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams::standard()
    }
}

/// A boat's seats. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoatLayout {
    pub id: String,
    pub seats: Vec<Seat>,
}

impl BoatLayout {
    /// Looks up a seat by id.
    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// Number of paddling rows (port seats).
    pub fn row_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.side == Some(Side::Port))
            .count()
    }

    /// Whether a seat with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.seat(id).is_some()
    }
}

/// Builds the layout id for a parameter set, e.g. `boat-10r-d-s`.
pub fn layout_id(params: &LayoutParams) -> String {
    let mut id = format!("boat-{}r", params.num_rows);
    if params.include_drummer {
        id.push_str("-d");
    }
    if params.include_steer {
        id.push_str("-s");
    }
    id
}

/// Generates the seat layout for a boat.
///
/// Output order is rows bow to stern (port then starboard per row), then the
/// drummer, then the steer. The same parameters always yield the same seats
/// in the same order, so stored assignments keep matching seat ids.
pub fn generate_layout(params: &LayoutParams) -> BoatLayout {
    let n = params.num_rows;
    let spacing = params.row_spacing;
    let center_index = (n as f64 - 1.0) / 2.0;
    let row_x = |row: usize| (row as f64 - center_index) * spacing;

    let mut seats = Vec::with_capacity(2 * n + 2);
    for row in 0..n {
        let x = row_x(row);
        seats.push(Seat::new(SeatKey::Port(row), x));
        seats.push(Seat::new(SeatKey::Starboard(row), x));
    }

    let bow_x = row_x(0);
    let stern_x = row_x(n.saturating_sub(1));
    if params.include_drummer {
        seats.push(Seat::new(SeatKey::Drummer, bow_x - spacing));
    }
    if params.include_steer {
        seats.push(Seat::new(SeatKey::Steer, stern_x + spacing));
    }

    BoatLayout {
        id: layout_id(params),
        seats,
    }
}
