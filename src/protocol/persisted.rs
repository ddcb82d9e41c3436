//! Stored lineup document.
//!
//! The storage collaborator keeps a lineup as position-indexed arrays:
//!
//! ```text
//! { drummer, steersperson,
//!   paddlers: { left: [..], right: [..] },
//!   alternates: [.., .., .., ..],
//!   drummer_secondary, steersperson_secondary,
//!   paddlers_secondary: { left: [..], right: [..] } }
//! ```
//!
//! Index 0 is the bow-most row; `left` is port and `right` is starboard.
//! Loading resizes the arrays to the boat rather than reordering them.

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assign::state::{AssignmentState, SlotAddr, Tier};
use crate::boat::athlete::AthleteId;
use crate::boat::seat::{SeatKey, ALTERNATE_COUNT};

/// Errors raised while reading or writing a stored lineup.
#[derive(Debug, Error)]
pub enum LineupError {
    #[error("malformed lineup JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-side paddler rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddlerRows {
    #[serde(default)]
    pub left: Vec<Option<AthleteId>>,
    #[serde(default)]
    pub right: Vec<Option<AthleteId>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedLineup {
    #[serde(default)]
    pub drummer: Option<AthleteId>,
    #[serde(default)]
    pub steersperson: Option<AthleteId>,
    #[serde(default)]
    pub paddlers: PaddlerRows,
    #[serde(default)]
    pub alternates: Vec<Option<AthleteId>>,
    #[serde(default)]
    pub drummer_secondary: Option<AthleteId>,
    #[serde(default)]
    pub steersperson_secondary: Option<AthleteId>,
    #[serde(default)]
    pub paddlers_secondary: PaddlerRows,
}

impl PersistedLineup {
    /// Snapshots a state. Paddler arrays have one entry per row; alternates
    /// always have `ALTERNATE_COUNT` entries.
    pub fn from_state(state: &AssignmentState) -> Self {
        let slot = |seat: SeatKey, tier: Tier| state.get(SlotAddr::new(seat, tier)).cloned();
        let rows = |tier: Tier| PaddlerRows {
            left: (0..state.rows()).map(|r| slot(SeatKey::Port(r), tier)).collect(),
            right: (0..state.rows()).map(|r| slot(SeatKey::Starboard(r), tier)).collect(),
        };

        PersistedLineup {
            drummer: slot(SeatKey::Drummer, Tier::Primary),
            steersperson: slot(SeatKey::Steer, Tier::Primary),
            paddlers: rows(Tier::Primary),
            alternates: (0..ALTERNATE_COUNT)
                .map(|i| slot(SeatKey::Alternate(i), Tier::Primary))
                .collect(),
            drummer_secondary: slot(SeatKey::Drummer, Tier::Secondary),
            steersperson_secondary: slot(SeatKey::Steer, Tier::Secondary),
            paddlers_secondary: rows(Tier::Secondary),
        }
    }

    /// Stored slots in canonical order: primaries (drummer, steer, port
    /// rows, starboard rows, alternates), then secondaries.
    fn entries(&self) -> Vec<(SlotAddr, &AthleteId)> {
        let mut out = Vec::new();
        for tier in [Tier::Primary, Tier::Secondary] {
            let (drummer, steer, paddlers) = match tier {
                Tier::Primary => (&self.drummer, &self.steersperson, &self.paddlers),
                Tier::Secondary => (
                    &self.drummer_secondary,
                    &self.steersperson_secondary,
                    &self.paddlers_secondary,
                ),
            };
            let mut seats: Vec<(SeatKey, &Option<AthleteId>)> =
                vec![(SeatKey::Drummer, drummer), (SeatKey::Steer, steer)];
            seats.extend(paddlers.left.iter().enumerate().map(|(r, id)| (SeatKey::Port(r), id)));
            seats.extend(
                paddlers.right.iter().enumerate().map(|(r, id)| (SeatKey::Starboard(r), id)),
            );
            if tier == Tier::Primary {
                seats.extend(
                    self.alternates.iter().enumerate().map(|(i, id)| (SeatKey::Alternate(i), id)),
                );
            }
            out.extend(seats.into_iter().filter_map(|(seat, id)| {
                id.as_ref().map(|id| (SlotAddr::new(seat, tier), id))
            }));
        }
        out
    }

    /// Rebuilds a state with `rows` paddling rows.
    ///
    /// Rows and alternates beyond the boat are dropped; missing rows stay
    /// empty. Empty-string ids count as empty slots. An athlete stored in
    /// more than one slot ends up in the last one.
    pub fn to_state(&self, rows: usize) -> AssignmentState {
        let mut state = AssignmentState::new(rows);
        let mut dropped = 0usize;
        for (addr, id) in self.entries() {
            if id.as_str().trim().is_empty() {
                continue;
            }
            if state.put(addr, id.clone()).is_err() {
                dropped += 1;
            }
        }
        if dropped > 0 {
            info!("{} stored slots fall outside a {}-row boat", dropped, rows);
        }
        state
    }

    pub fn from_json(json: &str) -> Result<Self, LineupError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, LineupError> {
        Ok(serde_json::to_string(self)?)
    }
}
