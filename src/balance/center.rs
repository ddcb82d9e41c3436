//! Fore/aft center of gravity.

use serde::Serialize;

use super::resolved_assignments;
use crate::boat::athlete::Roster;
use crate::boat::layout::BoatLayout;
use crate::boat::lineup::Lineup;

/// Weighted mean seat position and the weight it was taken over.
///
/// An empty boat is `{ x_cg: 0, total_weight: 0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CenterOfGravity {
    pub x_cg: f64,
    pub total_weight: f64,
}

/// Computes the center of gravity of the resolvable assignments.
pub fn compute_center_of_gravity(
    layout: &BoatLayout,
    roster: &Roster,
    lineup: &Lineup,
) -> CenterOfGravity {
    let mut total_weight = 0.0;
    let mut total_moment = 0.0;
    for (seat, athlete) in resolved_assignments(layout, roster, lineup) {
        let w = athlete.effective_weight();
        total_weight += w;
        total_moment += w * seat.x;
    }

    if total_weight == 0.0 {
        return CenterOfGravity::default();
    }
    CenterOfGravity {
        x_cg: total_moment / total_weight,
        total_weight,
    }
}
