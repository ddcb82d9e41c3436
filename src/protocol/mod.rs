//! Session protocol and stored formats.
//!
//! The stored lineup document and roster input exchanged with the storage
//! collaborators, and the line-oriented command parser used by the session
//! binary.

pub mod parser;
pub mod persisted;
pub mod roster;

pub use parser::{parse_command, Command};
pub use persisted::{LineupError, PaddlerRows, PersistedLineup};
pub use roster::{parse_roster, RosterEntry, RosterError};
