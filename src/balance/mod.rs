//! Balance evaluation.
//!
//! Pure functions over `(layout, roster, lineup)`: center of gravity along
//! the bow-stern axis, per-seat normalized leverage, and port/starboard
//! weight distribution. Assignments whose seat or athlete cannot be resolved
//! are skipped, never reported as errors.

pub mod center;
pub mod lateral;
pub mod leverage;
pub mod report;

pub use center::{compute_center_of_gravity, CenterOfGravity};
pub use lateral::{
    compute_left_right_distribution, BalanceStatus, LeftRightDistribution, BALANCE_TOLERANCE_PCT,
};
pub use leverage::{compute_seat_moments_for_lineup, SeatMoment, MOMENT_EPSILON};
pub use report::{evaluate, evaluate_batch, evaluate_tiers, BalanceReport, TierComparison};

use log::debug;

use crate::boat::athlete::{Athlete, Roster};
use crate::boat::layout::BoatLayout;
use crate::boat::lineup::Lineup;
use crate::boat::seat::Seat;

/// Assignments whose seat and athlete both resolve, in lineup order.
pub(crate) fn resolved_assignments<'a>(
    layout: &'a BoatLayout,
    roster: &'a Roster,
    lineup: &'a Lineup,
) -> impl Iterator<Item = (&'a Seat, &'a Athlete)> + 'a {
    lineup.assignments.iter().filter_map(move |a| {
        match (layout.seat(&a.seat_id), roster.get(a.athlete_id.as_str())) {
            (Some(seat), Some(athlete)) => Some((seat, athlete)),
            _ => {
                debug!(
                    "skipping unresolved assignment {} -> {}",
                    a.seat_id, a.athlete_id
                );
                None
            }
        }
    })
}
