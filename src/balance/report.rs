//! Combined balance reports.
//!
//! Bundles the three balance metrics and evaluates several lineups at once
//! on rayon's pool. Every input is an immutable snapshot, so evaluation can
//! run off the editing thread.

use rayon::prelude::*;
use serde::Serialize;

use super::center::{compute_center_of_gravity, CenterOfGravity};
use super::lateral::{compute_left_right_distribution, LeftRightDistribution};
use super::leverage::{compute_seat_moments_for_lineup, SeatMoment};
use crate::assign::state::AssignmentState;
use crate::boat::athlete::Roster;
use crate::boat::layout::BoatLayout;
use crate::boat::lineup::Lineup;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    pub center: CenterOfGravity,
    pub moments: Vec<SeatMoment>,
    pub distribution: LeftRightDistribution,
}

/// Reports for the primary lineup and the comparison lineup (secondary
/// occupants swapped in).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierComparison {
    pub primary: BalanceReport,
    pub comparison: BalanceReport,
}

/// Runs all three balance metrics over one lineup.
pub fn evaluate(layout: &BoatLayout, roster: &Roster, lineup: &Lineup) -> BalanceReport {
    BalanceReport {
        center: compute_center_of_gravity(layout, roster, lineup),
        moments: compute_seat_moments_for_lineup(layout, roster, lineup),
        distribution: compute_left_right_distribution(layout, roster, lineup),
    }
}

/// Evaluates the primary and comparison tiers of a state side by side.
pub fn evaluate_tiers(
    layout: &BoatLayout,
    roster: &Roster,
    state: &AssignmentState,
) -> TierComparison {
    let primary_lineup = state.primary_lineup(&layout.id);
    let comparison_lineup = state.comparison_lineup(&layout.id);
    let (primary, comparison) = rayon::join(
        || evaluate(layout, roster, &primary_lineup),
        || evaluate(layout, roster, &comparison_lineup),
    );
    TierComparison {
        primary,
        comparison,
    }
}

/// Evaluates many candidate lineups in parallel. Output order matches input.
pub fn evaluate_batch(
    layout: &BoatLayout,
    roster: &Roster,
    lineups: &[Lineup],
) -> Vec<BalanceReport> {
    lineups
        .par_iter()
        .map(|lineup| evaluate(layout, roster, lineup))
        .collect()
}
