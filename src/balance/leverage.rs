//! Per-seat fore/aft leverage.
//!
//! Each occupied seat's moment is `|w * x|`, normalized against the largest
//! moment in the lineup so the heaviest lever arm reads 1.0.

use serde::Serialize;

use super::resolved_assignments;
use crate::boat::athlete::{AthleteId, Roster};
use crate::boat::layout::BoatLayout;
use crate::boat::lineup::Lineup;

/// Floor for the normalizing maximum, so an all-centered lineup maps to 0.
pub const MOMENT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatMoment {
    pub seat_id: String,
    pub athlete_id: AthleteId,
    pub moment: f64,
    /// `moment / max(all moments, MOMENT_EPSILON)`, in `[0, 1]`.
    pub moment_normalized: f64,
}

/// Computes normalized moments for every resolvable assignment, in lineup
/// order.
pub fn compute_seat_moments_for_lineup(
    layout: &BoatLayout,
    roster: &Roster,
    lineup: &Lineup,
) -> Vec<SeatMoment> {
    let mut moments: Vec<SeatMoment> = resolved_assignments(layout, roster, lineup)
        .map(|(seat, athlete)| SeatMoment {
            seat_id: seat.id.clone(),
            athlete_id: athlete.id.clone(),
            moment: (athlete.effective_weight() * seat.x).abs(),
            moment_normalized: 0.0,
        })
        .collect();

    let max_moment = moments
        .iter()
        .map(|m| m.moment)
        .fold(MOMENT_EPSILON, f64::max);
    for m in &mut moments {
        m.moment_normalized = m.moment / max_moment;
    }
    moments
}
