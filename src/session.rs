//! Editor session state.
//!
//! Holds the current layout, roster, and assignment state for one editor,
//! plus the session options. Each handler runs one command to completion
//! and writes its protocol response.

use std::io::{self, Write};

use log::info;
use thiserror::Error;

use crate::assign::pool::derive_pool;
use crate::assign::state::AssignmentState;
use crate::assign::transition::{
    move_athlete, try_move_athlete, AssignError, Destination, MoveOutcome,
};
use crate::balance::{evaluate, evaluate_tiers, BalanceReport};
use crate::boat::athlete::{AthleteId, Roster};
use crate::boat::layout::{generate_layout, BoatLayout, LayoutParams};
use crate::boat::seat::SeatKey;
use crate::protocol::persisted::{LineupError, PersistedLineup};
use crate::protocol::roster::{parse_roster, RosterError};

/// Errors from `setoption`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    #[error("unknown option '{0}'")]
    Unknown(String),

    #[error("invalid value {value:?} for option '{name}'")]
    InvalidValue { name: String, value: Option<String> },
}

/// Errors a session command can end with.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] OptionError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Lineup(#[from] LineupError),
}

/// Session options. Layout options take effect at the next `newlineup`
/// (or `boat` for the row count).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub layout: LayoutParams,
    /// Report unresolvable moves as errors instead of silent no-ops.
    pub strict: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            layout: LayoutParams::standard(),
            strict: false,
        }
    }
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => Some(true),
        Some(v) => match v.as_str() {
            "true" | "on" | "yes" | "1" => Some(true),
            "false" | "off" | "no" | "0" => Some(false),
            _ => None,
        },
    }
}

impl SessionConfig {
    /// Applies one option. On error the config is unchanged.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.map(str::to_string),
        };
        match name.to_ascii_lowercase().as_str() {
            "rows" => {
                let rows = value
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .ok_or_else(invalid)?;
                self.layout.num_rows = rows;
            }
            "rowspacing" => {
                let spacing = value
                    .and_then(|v| v.trim().parse::<f64>().ok())
                    .filter(|s| s.is_finite() && *s > 0.0)
                    .ok_or_else(invalid)?;
                self.layout.row_spacing = spacing;
            }
            "drummer" => self.layout.include_drummer = parse_flag(value).ok_or_else(invalid)?,
            "steer" => self.layout.include_steer = parse_flag(value).ok_or_else(invalid)?,
            "strict" => self.strict = parse_flag(value).ok_or_else(invalid)?,
            _ => return Err(OptionError::Unknown(name.to_string())),
        }
        Ok(())
    }
}

/// One editor's in-memory session.
pub struct Session {
    pub config: SessionConfig,
    /// Parameters the current layout was built from. `config.layout` may hold
    /// pending changes that only apply at the next `newlineup`.
    pub params: LayoutParams,
    pub layout: BoatLayout,
    pub roster: Roster,
    pub state: AssignmentState,
}

impl Session {
    /// Creates a session on a standard boat with an empty roster.
    pub fn new() -> Self {
        Session::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let params = config.layout.clamped();
        let layout = generate_layout(&params);
        let state = AssignmentState::for_layout(&layout);
        Session {
            config,
            params,
            layout,
            roster: Roster::default(),
            state,
        }
    }

    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        self.config.set_option(name, value)
    }

    /// Rebuilds the layout from the options and clears every slot.
    pub fn new_lineup<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.params = self.config.layout.clamped();
        self.layout = generate_layout(&self.params);
        self.state = AssignmentState::for_layout(&self.layout);
        info!("new lineup on {}", self.layout.id);
        writeln!(out, "layout {} seats {}", self.layout.id, self.layout.seats.len())?;
        out.flush()
    }

    /// Changes the row count, keeping surviving rows as they are. Drummer,
    /// steer, and spacing stay as the current layout has them.
    pub fn resize<W: Write>(&mut self, rows: usize, out: &mut W) -> io::Result<()> {
        self.config.layout.num_rows = rows;
        self.params = LayoutParams {
            num_rows: rows,
            ..self.params
        }
        .clamped();
        self.layout = generate_layout(&self.params);
        let evicted = self.state.resize_rows(self.params.num_rows);

        let evicted = if evicted.is_empty() {
            "-".to_string()
        } else {
            evicted
                .iter()
                .map(|a| a.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        };
        writeln!(out, "resized {} evicted {}", self.params.num_rows, evicted)?;
        out.flush()
    }

    pub fn load_roster<W: Write>(&mut self, json: &str, out: &mut W) -> Result<(), SessionError> {
        self.roster = parse_roster(json)?;
        writeln!(out, "roster {}", self.roster.len())?;
        out.flush()?;
        Ok(())
    }

    /// Replaces the state with a stored lineup, fitted to the current boat.
    pub fn load_lineup<W: Write>(&mut self, json: &str, out: &mut W) -> Result<(), SessionError> {
        let doc = PersistedLineup::from_json(json)?;
        self.state = doc.to_state(self.layout.row_count());
        self.vacate_absent_seats();
        writeln!(out, "loaded {}", self.state.assigned_count())?;
        out.flush()?;
        Ok(())
    }

    /// Whether the boat has this seat. The slot state always carries drummer
    /// and steer slots; the layout may not.
    fn seat_in_boat(&self, key: SeatKey) -> bool {
        match key {
            SeatKey::Drummer | SeatKey::Steer => self.layout.contains(&key.seat_id()),
            _ => true,
        }
    }

    /// Returns occupants of drummer or steer slots the layout lacks to the
    /// pool.
    fn vacate_absent_seats(&mut self) {
        let stranded: Vec<AthleteId> = self
            .state
            .occupied()
            .filter(|(addr, _)| !self.seat_in_boat(addr.seat))
            .map(|(_, id)| id.clone())
            .collect();
        for id in &stranded {
            self.state.clear_athlete(id.as_str());
            info!("{} has no seat in {}, returned to pool", id, self.layout.id);
        }
    }

    /// Applies a move and reports what happened.
    pub fn handle_move<W: Write>(
        &mut self,
        athlete: &str,
        dest: Destination,
        out: &mut W,
    ) -> io::Result<()> {
        if let Destination::Seat(target) = dest {
            if !self.seat_in_boat(target.seat) {
                if self.config.strict {
                    let err = AssignError::SeatNotFound(target.seat.seat_id());
                    writeln!(out, "error {}", err)?;
                } else {
                    writeln!(out, "noop {}", athlete)?;
                }
                return out.flush();
            }
        }

        let outcome = if self.config.strict {
            match try_move_athlete(&mut self.state, &self.roster, athlete, dest) {
                Ok(outcome) => outcome,
                Err(e) => {
                    writeln!(out, "error {}", e)?;
                    return out.flush();
                }
            }
        } else {
            move_athlete(&mut self.state, &self.roster, athlete, dest)
        };

        match outcome {
            MoveOutcome::NoOp => writeln!(out, "noop {}", athlete)?,
            MoveOutcome::Unassigned { .. } => writeln!(out, "unassigned {}", athlete)?,
            MoveOutcome::Placed {
                slot,
                evicted: None,
                ..
            } => writeln!(out, "moved {} {}", athlete, slot)?,
            MoveOutcome::Placed {
                slot,
                evicted: Some(bumped),
                ..
            } => writeln!(out, "moved {} {} evicted {}", athlete, slot, bumped)?,
        }
        out.flush()
    }

    /// Balance report for the current primary lineup.
    pub fn report(&self) -> BalanceReport {
        let lineup = self.state.primary_lineup(&self.layout.id);
        evaluate(&self.layout, &self.roster, &lineup)
    }

    pub fn handle_balance<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let report = self.report();
        let d = &report.distribution;
        writeln!(
            out,
            "cg {:.4} total {:.2}",
            report.center.x_cg, report.center.total_weight
        )?;
        writeln!(
            out,
            "sides port {:.2} starboard {:.2} center {:.2} ratio {:.2} {:.2} status {}",
            d.port_weight,
            d.starboard_weight,
            d.center_weight,
            d.port_ratio,
            d.starboard_ratio,
            d.status
        )?;
        for m in &report.moments {
            writeln!(out, "moment {} {:.4}", m.seat_id, m.moment_normalized)?;
        }
        writeln!(out, "balanceok")?;
        out.flush()
    }

    pub fn handle_compare<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let tiers = evaluate_tiers(&self.layout, &self.roster, &self.state);
        for (label, report) in [("primary", &tiers.primary), ("secondary", &tiers.comparison)] {
            writeln!(
                out,
                "compare {} cg {:.4} total {:.2} status {}",
                label,
                report.center.x_cg,
                report.center.total_weight,
                report.distribution.status
            )?;
        }
        out.flush()
    }

    pub fn handle_pool<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let pool = derive_pool(&self.state, &self.roster);
        if pool.is_empty() {
            writeln!(out, "pool -")?;
        } else {
            let ids: Vec<&str> = pool.iter().map(|a| a.id.as_str()).collect();
            writeln!(out, "pool {}", ids.join(" "))?;
        }
        out.flush()
    }

    pub fn handle_export<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        let json = PersistedLineup::from_state(&self.state).to_json()?;
        writeln!(out, "lineup {}", json)?;
        out.flush()?;
        Ok(())
    }

    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
