//! Dragonseat engine library.
//!
//! Seat layouts, the balance engine, and the seat-assignment state machine
//! for multi-person paddled boats, plus the session protocol used by the
//! binary entry point.

pub mod assign;
pub mod balance;
pub mod boat;
pub mod protocol;
pub mod session;
