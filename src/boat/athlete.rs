//! Athletes and the roster they are drawn from.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque athlete identifier as issued by the roster source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AthleteId(pub String);

impl AthleteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AthleteId {
    fn from(s: &str) -> Self {
        AthleteId(s.to_string())
    }
}

impl From<String> for AthleteId {
    fn from(s: String) -> Self {
        AthleteId(s)
    }
}

impl Borrow<str> for AthleteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AthleteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An athlete as seen by the balance and assignment engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: AthleteId,
    pub name: String,
    pub weight_kg: f64,
    /// Inactive athletes are never offered from the pool.
    pub active: bool,
}

impl Athlete {
    pub fn new(id: impl Into<AthleteId>, name: impl Into<String>, weight_kg: f64) -> Self {
        Athlete {
            id: id.into(),
            name: name.into(),
            weight_kg,
            active: true,
        }
    }

    /// Weight used for aggregation: non-finite or negative weights count as 0.
    pub fn effective_weight(&self) -> f64 {
        if self.weight_kg.is_finite() && self.weight_kg > 0.0 {
            self.weight_kg
        } else {
            0.0
        }
    }
}

/// Ordered athlete collection with id lookup.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    athletes: Vec<Athlete>,
    index: HashMap<AthleteId, usize>,
}

impl Roster {
    /// Builds a roster. A repeated id replaces the earlier entry in place.
    pub fn new(athletes: Vec<Athlete>) -> Self {
        let mut roster = Roster::default();
        for athlete in athletes {
            roster.insert(athlete);
        }
        roster
    }

    /// Adds or replaces an athlete.
    pub fn insert(&mut self, athlete: Athlete) {
        match self.index.get(&athlete.id) {
            Some(&i) => self.athletes[i] = athlete,
            None => {
                self.index.insert(athlete.id.clone(), self.athletes.len());
                self.athletes.push(athlete);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Athlete> {
        self.index.get(id).map(|&i| &self.athletes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All athletes in insertion order.
    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    /// Athletes that may be offered from the pool, in roster order.
    pub fn eligible(&self) -> impl Iterator<Item = &Athlete> {
        self.athletes.iter().filter(|a| a.active)
    }

    pub fn len(&self) -> usize {
        self.athletes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.athletes.is_empty()
    }
}
