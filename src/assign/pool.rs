//! The unassigned pool, derived on every read.
//!
//! `pool = eligible athletes - every id present in any slot`. Nothing here
//! is cached; the slot state is the only source of truth.

use super::state::AssignmentState;
use crate::boat::athlete::{Athlete, Roster};

/// Eligible athletes not present in any slot, in roster order.
pub fn derive_pool<'r>(state: &AssignmentState, roster: &'r Roster) -> Vec<&'r Athlete> {
    roster
        .eligible()
        .filter(|a| !state.is_assigned(a.id.as_str()))
        .collect()
}

/// Whether an athlete is currently in the pool.
pub fn in_pool(state: &AssignmentState, roster: &Roster, athlete: &str) -> bool {
    !state.is_assigned(athlete) && roster.get(athlete).is_some_and(|a| a.active)
}
