//! Session command parser.
//!
//! Parses one line of session input into a structured `Command` for the
//! main loop to dispatch on.

use crate::assign::transition::Destination;

/// A parsed editor-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine replies `readyok`.
    IsReady,

    /// Set a session option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a fresh lineup on a layout built from the current options.
    NewLineup,

    /// Change the boat's row count, evicting occupants of dropped rows.
    Boat { rows: usize },

    /// Replace the roster with a JSON array of roster entries.
    Roster { json: String },

    /// Replace the assignment state with a stored lineup document.
    Load { json: String },

    /// Move an athlete to a seat or back to the pool.
    Move { athlete: String, dest: Destination },

    /// Report balance metrics for the primary lineup.
    Balance,

    /// Report balance for the primary and comparison tiers.
    Compare,

    /// List the unassigned pool.
    Pool,

    /// Print the stored lineup document.
    Export,

    /// Terminate the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "newlineup" => Some(Command::NewLineup),
        "balance" => Some(Command::Balance),
        "compare" => Some(Command::Compare),
        "pool" => Some(Command::Pool),
        "export" => Some(Command::Export),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "boat" => parse_boat(&tokens),
        "roster" => parse_payload(trimmed, "roster").map(|json| Command::Roster { json }),
        "load" => parse_payload(trimmed, "load").map(|json| Command::Load { json }),
        "move" => parse_move(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let (name_parts, value) = match tokens.iter().position(|&t| t == "value") {
        Some(vi) => {
            let value_parts = &tokens[vi + 1..];
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (&tokens[2..vi], value)
        }
        None => (&tokens[2..], None),
    };
    if name_parts.is_empty() {
        eprintln!("malformed setoption: empty name");
        return None;
    }

    Some(Command::SetOption {
        name: name_parts.join(" "),
        value,
    })
}

/// Parses `boat <rows>`.
fn parse_boat(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed boat: expected 'boat <rows>'");
        return None;
    }
    match tokens[1].parse::<usize>() {
        Ok(rows) => Some(Command::Boat { rows }),
        Err(_) => {
            eprintln!("invalid row count: '{}'", tokens[1]);
            None
        }
    }
}

/// Captures everything after the command keyword as a raw payload.
fn parse_payload(line: &str, keyword: &str) -> Option<String> {
    let payload = line.strip_prefix(keyword).unwrap_or("").trim();
    if payload.is_empty() {
        eprintln!("malformed {}: expected '{} <json>'", keyword, keyword);
        return None;
    }
    Some(payload.to_string())
}

/// Parses `move <athlete> <pool|seat[/tier]>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        eprintln!("malformed move: expected 'move <athlete> <pool|seat[/tier]>'");
        return None;
    }
    match Destination::parse(tokens[2]) {
        Some(dest) => Some(Command::Move {
            athlete: tokens[1].to_string(),
            dest,
        }),
        None => {
            eprintln!("unknown destination: '{}'", tokens[2]);
            None
        }
    }
}
