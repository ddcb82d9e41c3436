//! Seat identity and geometry.
//!
//! A seat is a fixed position along the bow-stern axis. Paddling seats come
//! in port/starboard pairs per row; drummer and steer sit on the centerline.
//! Alternates are reserve positions with no geometry of their own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the hull a seat is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Port,
    Starboard,
    Center,
}

impl Side {
    /// Returns the lowercase name used in seat ids and protocol output.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Port => "port",
            Side::Starboard => "starboard",
            Side::Center => "center",
        }
    }

    /// Infers a side from a free-form seat id.
    ///
    /// Used when a seat carries no explicit side. Port/left is checked before
    /// starboard/right; anything else is center.
    pub fn infer_from_id(id: &str) -> Side {
        let lower = id.to_ascii_lowercase();
        if lower.contains("port") || lower.contains("left") {
            Side::Port
        } else if lower.contains("starboard") || lower.contains("right") {
            Side::Starboard
        } else {
            Side::Center
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of reserve positions carried alongside every boat.
pub const ALTERNATE_COUNT: usize = 4;

/// Structured identity of a seat in the assignment state.
///
/// Rows are zero-based from the bow. `Alternate` indices are in
/// `0..ALTERNATE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeatKey {
    Drummer,
    Steer,
    Port(usize),
    Starboard(usize),
    Alternate(usize),
}

impl SeatKey {
    /// Returns the canonical textual seat id.
    pub fn seat_id(self) -> String {
        match self {
            SeatKey::Drummer => "drummer".to_string(),
            SeatKey::Steer => "steer".to_string(),
            SeatKey::Port(row) => format!("port-{}", row),
            SeatKey::Starboard(row) => format!("starboard-{}", row),
            SeatKey::Alternate(i) => format!("alternate-{}", i),
        }
    }

    /// Parses a seat id. Accepts the canonical ids plus the `left-`/`right-`
    /// and `steersperson` spellings used by older stored lineups.
    pub fn parse(id: &str) -> Option<SeatKey> {
        let id = id.trim().to_ascii_lowercase();
        match id.as_str() {
            "drummer" => return Some(SeatKey::Drummer),
            "steer" | "steersperson" => return Some(SeatKey::Steer),
            _ => {}
        }

        let (prefix, index) = id.rsplit_once('-')?;
        let index: usize = index.parse().ok()?;
        match prefix {
            "port" | "left" => Some(SeatKey::Port(index)),
            "starboard" | "right" => Some(SeatKey::Starboard(index)),
            "alternate" | "alt" => Some(SeatKey::Alternate(index)),
            _ => None,
        }
    }

    /// Returns the side this seat sits on. Alternates report `Center`.
    pub const fn side(self) -> Side {
        match self {
            SeatKey::Port(_) => Side::Port,
            SeatKey::Starboard(_) => Side::Starboard,
            SeatKey::Drummer | SeatKey::Steer | SeatKey::Alternate(_) => Side::Center,
        }
    }

    /// Whether this seat supports a secondary (comparison) occupant.
    pub const fn has_secondary(self) -> bool {
        !matches!(self, SeatKey::Alternate(_))
    }
}

impl fmt::Display for SeatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.seat_id())
    }
}

/// A seat in a boat layout.
///
/// `x` is signed: negative toward the bow, positive toward the stern.
/// `side` may be absent for seats loaded from foreign layouts; the balance
/// engine then falls back to [`Side::infer_from_id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    #[serde(default)]
    pub side: Option<Side>,
    pub x: f64,
}

impl Seat {
    /// Creates a seat for a structured key at the given position.
    pub fn new(key: SeatKey, x: f64) -> Self {
        Seat {
            id: key.seat_id(),
            side: Some(key.side()),
            x,
        }
    }

    /// The explicit side if present, otherwise inferred from the id.
    pub fn resolved_side(&self) -> Side {
        self.side.unwrap_or_else(|| Side::infer_from_id(&self.id))
    }
}
