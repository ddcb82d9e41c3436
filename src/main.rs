//! Dragonseat -- a lineup editing session over stdin/stdout.
//!
//! Reads one command per line and writes protocol responses to stdout.
//! Diagnostics go to stderr; set `DRAGONSEAT_LOG` (error, warn, info,
//! debug, trace) to see engine logging.

use std::env;
use std::io::{self, BufRead};

use log::{LevelFilter, Log, Metadata, Record};

use dragonseat::protocol::parser::{parse_command, Command};
use dragonseat::session::{Session, SessionError};

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = env::var("DRAGONSEAT_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Runs the session loop until `quit`, end of input, or a broken stdout.
fn main() {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let result: Result<(), SessionError> = match cmd {
            Command::IsReady => session.handle_isready(&mut out).map_err(Into::into),
            Command::SetOption { name, value } => session
                .set_option(&name, value.as_deref())
                .map_err(Into::into),
            Command::NewLineup => session.new_lineup(&mut out).map_err(Into::into),
            Command::Boat { rows } => session.resize(rows, &mut out).map_err(Into::into),
            Command::Roster { json } => session.load_roster(&json, &mut out),
            Command::Load { json } => session.load_lineup(&json, &mut out),
            Command::Move { athlete, dest } => session
                .handle_move(&athlete, dest, &mut out)
                .map_err(Into::into),
            Command::Balance => session.handle_balance(&mut out).map_err(Into::into),
            Command::Compare => session.handle_compare(&mut out).map_err(Into::into),
            Command::Pool => session.handle_pool(&mut out).map_err(Into::into),
            Command::Export => session.handle_export(&mut out),
            Command::Quit => break,
        };

        match result {
            Ok(()) => {}
            Err(SessionError::Io(_)) => break,
            Err(e) => eprintln!("{}", e),
        }
    }
}
