//! Seat-assignment transitions.
//!
//! A move takes one athlete to a seat or back to the pool. The athlete is
//! first cleared from every slot it holds, so stale source references never
//! matter. Placement at the destination fills the primary slot, then the
//! secondary, and otherwise overwrites; an overwritten occupant is not moved
//! anywhere and simply reappears in the derived pool.

use log::{debug, info};
use thiserror::Error;

use super::pool::in_pool;
use super::state::{AssignmentState, SeatSlots, SlotAddr, SlotRef, Tier};
use crate::boat::athlete::{AthleteId, Roster};

/// Where a move sends the athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Pool,
    Seat(SlotRef),
}

impl Destination {
    /// Parses `pool` or a slot reference such as `port-2/secondary`.
    pub fn parse(s: &str) -> Option<Destination> {
        if s.trim().eq_ignore_ascii_case("pool") {
            return Some(Destination::Pool);
        }
        SlotRef::parse(s).map(Destination::Seat)
    }
}

/// What a move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The athlete or destination could not be resolved; nothing changed.
    NoOp,
    /// The athlete went back to the pool.
    Unassigned { from: Option<SlotAddr> },
    /// The athlete now sits in `slot`. `evicted` is the bumped occupant,
    /// which is now in the pool.
    Placed {
        slot: SlotAddr,
        from: Option<SlotAddr>,
        evicted: Option<AthleteId>,
    },
}

/// Resolution failures surfaced by [`try_move_athlete`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    #[error("athlete '{0}' is neither seated nor in the pool")]
    AthleteNotFound(AthleteId),

    #[error("seat '{0}' does not exist in this boat")]
    SeatNotFound(String),
}

/// Picks the tier to write at a destination seat.
fn placement_tier(slots: &SeatSlots, requested: Option<Tier>) -> Tier {
    if slots.is_vacant(Tier::Primary) {
        return Tier::Primary;
    }
    if slots.is_vacant(Tier::Secondary) {
        return Tier::Secondary;
    }
    match requested {
        Some(tier) => tier,
        None if slots.supports(Tier::Secondary) => Tier::Secondary,
        None => Tier::Primary,
    }
}

/// Applies a move, reporting unresolvable athletes or seats as errors.
///
/// On error the state is untouched.
pub fn try_move_athlete(
    state: &mut AssignmentState,
    roster: &Roster,
    athlete: &str,
    dest: Destination,
) -> Result<MoveOutcome, AssignError> {
    if !state.is_assigned(athlete) && !in_pool(state, roster, athlete) {
        return Err(AssignError::AthleteNotFound(AthleteId::from(athlete)));
    }

    if let Destination::Seat(target) = dest {
        let exists = match (state.seat(target.seat), target.tier) {
            (Some(slots), Some(tier)) => slots.supports(tier),
            (Some(_), None) => true,
            (None, _) => false,
        };
        if !exists {
            let id = match target.tier {
                Some(tier) => SlotAddr::new(target.seat, tier).to_string(),
                None => target.seat.seat_id(),
            };
            return Err(AssignError::SeatNotFound(id));
        }
    }

    let from = state.clear_athlete(athlete);

    let target = match dest {
        Destination::Pool => {
            debug!("{} returned to pool", athlete);
            return Ok(MoveOutcome::Unassigned { from });
        }
        Destination::Seat(target) => target,
    };

    let tier = state
        .seat(target.seat)
        .map(|slots| placement_tier(slots, target.tier))
        .unwrap_or(Tier::Primary);
    let slot = SlotAddr::new(target.seat, tier);
    let evicted = state
        .put(slot, AthleteId::from(athlete))
        .map_err(|_| AssignError::SeatNotFound(slot.to_string()))?;

    if let Some(bumped) = &evicted {
        info!("{} took {}, {} evicted to pool", athlete, slot, bumped);
    } else {
        debug!("{} placed at {}", athlete, slot);
    }
    debug_assert!(state.check_invariants().is_ok());

    Ok(MoveOutcome::Placed {
        slot,
        from,
        evicted,
    })
}

/// Applies a move. Unresolvable athletes or seats are no-ops.
pub fn move_athlete(
    state: &mut AssignmentState,
    roster: &Roster,
    athlete: &str,
    dest: Destination,
) -> MoveOutcome {
    match try_move_athlete(state, roster, athlete, dest) {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!("move ignored: {}", e);
            MoveOutcome::NoOp
        }
    }
}
