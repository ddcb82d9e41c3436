//! Canonical seat occupancy.
//!
//! Every seat owns a small slot list: `[primary, secondary]` for boat seats,
//! `[primary]` for alternates. An athlete id occupies at most one slot across
//! the whole state; an athlete -> slot index keeps that lookup O(1).
//! The unassigned pool is never stored here (see [`super::pool`]).

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::boat::athlete::AthleteId;
use crate::boat::layout::BoatLayout;
use crate::boat::lineup::{Assignment, Lineup};
use crate::boat::seat::{SeatKey, ALTERNATE_COUNT};

/// Occupancy tier within a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Primary,
    Secondary,
}

impl Tier {
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Primary => "primary",
            Tier::Secondary => "secondary",
        }
    }

    pub fn parse(s: &str) -> Option<Tier> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "p" => Some(Tier::Primary),
            "secondary" | "s" => Some(Tier::Secondary),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Tier::Primary => 0,
            Tier::Secondary => 1,
        }
    }
}

/// Exact location of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotAddr {
    pub seat: SeatKey,
    pub tier: Tier,
}

impl SlotAddr {
    pub const fn new(seat: SeatKey, tier: Tier) -> Self {
        SlotAddr { seat, tier }
    }

    pub const fn primary(seat: SeatKey) -> Self {
        SlotAddr::new(seat, Tier::Primary)
    }
}

impl fmt::Display for SlotAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.seat, self.tier.name())
    }
}

/// A move destination seat, optionally pinned to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub seat: SeatKey,
    pub tier: Option<Tier>,
}

impl SlotRef {
    /// A tier-agnostic reference.
    pub const fn seat(seat: SeatKey) -> Self {
        SlotRef { seat, tier: None }
    }

    pub const fn with_tier(seat: SeatKey, tier: Tier) -> Self {
        SlotRef {
            seat,
            tier: Some(tier),
        }
    }

    /// Parses `port-3`, `port-3/secondary`, `drummer/primary`, ...
    pub fn parse(s: &str) -> Option<SlotRef> {
        match s.split_once('/') {
            Some((seat, tier)) => Some(SlotRef::with_tier(
                SeatKey::parse(seat)?,
                Tier::parse(tier)?,
            )),
            None => Some(SlotRef::seat(SeatKey::parse(s)?)),
        }
    }
}

/// Slot list for one seat: `[primary, secondary?]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSlots {
    slots: [Option<AthleteId>; 2],
    dual: bool,
}

impl SeatSlots {
    /// Slots for a boat seat (primary + secondary).
    pub const fn dual() -> Self {
        SeatSlots {
            slots: [None, None],
            dual: true,
        }
    }

    /// Slots for an alternate (primary only).
    pub const fn single() -> Self {
        SeatSlots {
            slots: [None, None],
            dual: false,
        }
    }

    pub const fn supports(&self, tier: Tier) -> bool {
        match tier {
            Tier::Primary => true,
            Tier::Secondary => self.dual,
        }
    }

    /// The occupant of a tier. `None` for an empty or unsupported tier.
    pub fn get(&self, tier: Tier) -> Option<&AthleteId> {
        if !self.supports(tier) {
            return None;
        }
        self.slots[tier.index()].as_ref()
    }

    pub fn is_vacant(&self, tier: Tier) -> bool {
        self.supports(tier) && self.slots[tier.index()].is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Supported tiers in order.
    pub fn tiers(&self) -> &'static [Tier] {
        if self.dual {
            &[Tier::Primary, Tier::Secondary]
        } else {
            &[Tier::Primary]
        }
    }

    fn slot_mut(&mut self, tier: Tier) -> Option<&mut Option<AthleteId>> {
        if self.supports(tier) {
            Some(&mut self.slots[tier.index()])
        } else {
            None
        }
    }
}

/// Invariant violations reported by [`AssignmentState::check_invariants`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("athlete '{athlete}' occupies both {first} and {second}")]
    DuplicateAthlete {
        athlete: AthleteId,
        first: SlotAddr,
        second: SlotAddr,
    },

    #[error("index points athlete '{athlete}' at {addr}, which does not hold it")]
    StaleIndex { athlete: AthleteId, addr: SlotAddr },

    #[error("athlete '{athlete}' at {addr} is missing from the index")]
    MissingIndex { athlete: AthleteId, addr: SlotAddr },

    #[error("no slot {0} in this boat")]
    NoSuchSlot(SlotAddr),
}

/// The canonical slot state for one boat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentState {
    pub(super) drummer: SeatSlots,
    pub(super) steer: SeatSlots,
    pub(super) port: Vec<SeatSlots>,
    pub(super) starboard: Vec<SeatSlots>,
    pub(super) alternates: Vec<SeatSlots>,
    pub(super) index: HashMap<AthleteId, SlotAddr>,
}

impl AssignmentState {
    /// Creates an empty state with `rows` paddling rows.
    pub fn new(rows: usize) -> Self {
        AssignmentState {
            drummer: SeatSlots::dual(),
            steer: SeatSlots::dual(),
            port: vec![SeatSlots::dual(); rows],
            starboard: vec![SeatSlots::dual(); rows],
            alternates: vec![SeatSlots::single(); ALTERNATE_COUNT],
            index: HashMap::new(),
        }
    }

    /// Creates an empty state sized for a layout.
    pub fn for_layout(layout: &BoatLayout) -> Self {
        AssignmentState::new(layout.row_count())
    }

    pub fn rows(&self) -> usize {
        self.port.len()
    }

    /// All seat keys in canonical order: drummer, steer, port rows,
    /// starboard rows, alternates.
    pub fn seat_keys(&self) -> Vec<SeatKey> {
        let mut keys = Vec::with_capacity(2 + 2 * self.rows() + self.alternates.len());
        keys.push(SeatKey::Drummer);
        keys.push(SeatKey::Steer);
        keys.extend((0..self.port.len()).map(SeatKey::Port));
        keys.extend((0..self.starboard.len()).map(SeatKey::Starboard));
        keys.extend((0..self.alternates.len()).map(SeatKey::Alternate));
        keys
    }

    pub fn seat(&self, key: SeatKey) -> Option<&SeatSlots> {
        match key {
            SeatKey::Drummer => Some(&self.drummer),
            SeatKey::Steer => Some(&self.steer),
            SeatKey::Port(row) => self.port.get(row),
            SeatKey::Starboard(row) => self.starboard.get(row),
            SeatKey::Alternate(i) => self.alternates.get(i),
        }
    }

    fn seat_mut(&mut self, key: SeatKey) -> Option<&mut SeatSlots> {
        match key {
            SeatKey::Drummer => Some(&mut self.drummer),
            SeatKey::Steer => Some(&mut self.steer),
            SeatKey::Port(row) => self.port.get_mut(row),
            SeatKey::Starboard(row) => self.starboard.get_mut(row),
            SeatKey::Alternate(i) => self.alternates.get_mut(i),
        }
    }

    /// Whether the slot exists in this state's shape.
    pub fn has_slot(&self, addr: SlotAddr) -> bool {
        self.seat(addr.seat).is_some_and(|s| s.supports(addr.tier))
    }

    /// The occupant of a slot.
    pub fn get(&self, addr: SlotAddr) -> Option<&AthleteId> {
        self.seat(addr.seat).and_then(|s| s.get(addr.tier))
    }

    /// Where an athlete currently sits, if anywhere.
    pub fn locate(&self, athlete: &str) -> Option<SlotAddr> {
        self.index.get(athlete).copied()
    }

    pub fn is_assigned(&self, athlete: &str) -> bool {
        self.index.contains_key(athlete)
    }

    /// Number of occupied slots.
    pub fn assigned_count(&self) -> usize {
        self.index.len()
    }

    /// Every occupied slot in canonical seat order, primary before secondary.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotAddr, &AthleteId)> + '_ {
        self.seat_keys().into_iter().flat_map(move |key| {
            let slots = self.seat(key);
            [Tier::Primary, Tier::Secondary]
                .into_iter()
                .filter_map(move |tier| {
                    slots
                        .and_then(|s| s.get(tier))
                        .map(|id| (SlotAddr::new(key, tier), id))
                })
        })
    }

    /// Removes an athlete from whatever slot holds it.
    pub(crate) fn clear_athlete(&mut self, athlete: &str) -> Option<SlotAddr> {
        let addr = self.index.remove(athlete)?;
        if let Some(slot) = self.seat_mut(addr.seat).and_then(|s| s.slot_mut(addr.tier)) {
            *slot = None;
        }
        Some(addr)
    }

    /// Writes an athlete into a slot, clearing it from anywhere else first.
    ///
    /// On success returns the previous occupant, which is no longer present
    /// anywhere in the state.
    pub(crate) fn put(
        &mut self,
        addr: SlotAddr,
        athlete: AthleteId,
    ) -> Result<Option<AthleteId>, StateError> {
        if !self.has_slot(addr) {
            return Err(StateError::NoSuchSlot(addr));
        }
        self.clear_athlete(athlete.as_str());

        let slot = self
            .seat_mut(addr.seat)
            .and_then(|s| s.slot_mut(addr.tier))
            .ok_or(StateError::NoSuchSlot(addr))?;
        let evicted = slot.replace(athlete.clone());
        if let Some(prev) = &evicted {
            self.index.remove(prev.as_str());
        }
        self.index.insert(athlete, addr);
        Ok(evicted)
    }

    /// Drops every row at or beyond `rows`, returning the athletes they held.
    pub(super) fn truncate_rows(&mut self, rows: usize) -> Vec<AthleteId> {
        let mut evicted = Vec::new();
        for row in rows..self.port.len() {
            for slots in [&self.port[row], &self.starboard[row]] {
                for &tier in slots.tiers() {
                    if let Some(id) = slots.get(tier) {
                        evicted.push(id.clone());
                    }
                }
            }
        }
        for id in &evicted {
            self.index.remove(id.as_str());
        }
        self.port.truncate(rows);
        self.starboard.truncate(rows);
        evicted
    }

    /// Appends empty rows up to `rows`.
    pub(super) fn pad_rows(&mut self, rows: usize) {
        self.port.resize(rows, SeatSlots::dual());
        self.starboard.resize(rows, SeatSlots::dual());
    }

    fn boat_lineup(
        &self,
        layout_id: &str,
        pick: impl Fn(&SeatSlots) -> Option<&AthleteId>,
    ) -> Lineup {
        let assignments = self
            .seat_keys()
            .into_iter()
            .filter(|key| !matches!(key, SeatKey::Alternate(_)))
            .filter_map(|key| {
                let id = self.seat(key).and_then(&pick)?;
                Some(Assignment {
                    seat_id: key.seat_id(),
                    athlete_id: id.clone(),
                })
            })
            .collect();
        Lineup {
            boat_layout_id: layout_id.to_string(),
            assignments,
        }
    }

    /// Boat seats' primary occupants. Alternates are not boat seats and are
    /// left out.
    pub fn primary_lineup(&self, layout_id: &str) -> Lineup {
        self.boat_lineup(layout_id, |s| s.get(Tier::Primary))
    }

    /// Boat seats' secondary occupants only.
    pub fn secondary_lineup(&self, layout_id: &str) -> Lineup {
        self.boat_lineup(layout_id, |s| s.get(Tier::Secondary))
    }

    /// The lineup with every secondary occupant swapped in over its seat's
    /// primary; seats without a secondary keep their primary.
    pub fn comparison_lineup(&self, layout_id: &str) -> Lineup {
        self.boat_lineup(layout_id, |s| {
            s.get(Tier::Secondary).or_else(|| s.get(Tier::Primary))
        })
    }

    /// Verifies slot uniqueness and index consistency.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        let mut seen: HashMap<&AthleteId, SlotAddr> = HashMap::new();
        for (addr, id) in self.occupied() {
            if let Some(first) = seen.insert(id, addr) {
                return Err(StateError::DuplicateAthlete {
                    athlete: id.clone(),
                    first,
                    second: addr,
                });
            }
            if self.index.get(id.as_str()) != Some(&addr) {
                return Err(StateError::MissingIndex {
                    athlete: id.clone(),
                    addr,
                });
            }
        }
        for (id, &addr) in &self.index {
            if self.get(addr) != Some(id) {
                return Err(StateError::StaleIndex {
                    athlete: id.clone(),
                    addr,
                });
            }
        }
        Ok(())
    }
}
