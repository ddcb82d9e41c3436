//! Flattened seat-to-athlete view consumed by the balance engine.

use serde::{Deserialize, Serialize};

use super::athlete::AthleteId;

/// One fact: this athlete currently occupies this seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub seat_id: String,
    pub athlete_id: AthleteId,
}

impl Assignment {
    pub fn new(seat_id: impl Into<String>, athlete_id: impl Into<AthleteId>) -> Self {
        Assignment {
            seat_id: seat_id.into(),
            athlete_id: athlete_id.into(),
        }
    }
}

/// An order-independent set of assignments against one layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub boat_layout_id: String,
    pub assignments: Vec<Assignment>,
}

impl Lineup {
    /// Creates an empty lineup for a layout.
    pub fn empty(boat_layout_id: impl Into<String>) -> Self {
        Lineup {
            boat_layout_id: boat_layout_id.into(),
            assignments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Returns the athlete assigned to a seat, if any.
    pub fn athlete_at(&self, seat_id: &str) -> Option<&AthleteId> {
        self.assignments
            .iter()
            .find(|a| a.seat_id == seat_id)
            .map(|a| &a.athlete_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn athlete_at_finds_assignment() {
        let lineup = Lineup {
            boat_layout_id: "boat-5r-d-s".to_string(),
            assignments: vec![
                Assignment::new("drummer", "a1"),
                Assignment::new("port-0", "a2"),
            ],
        };
        assert_eq!(lineup.athlete_at("port-0").map(|a| a.as_str()), Some("a2"));
        assert_eq!(lineup.athlete_at("steer"), None);
        assert!(!lineup.is_empty());
        assert!(Lineup::empty("x").is_empty());
    }
}
