//! REPL – interactive console standing in for the remote command source.
//!
//! Bare input is treated as a command string and forwarded to the
//! interpreter one symbol at a time (`f` forward, `l` left, `r` right), so
//! `ffr` walks two cells and turns east. Slash-commands:
//!   /help           – show this list
//!   /status         – read the robot status string
//!   /battery <pct>  – set the simulated battery level
//!   /obstacle on|off – place or clear the simulated obstacle
//!   /history        – dump the telemetry journal as JSON lines
//!   /reset          – re-initialize the robot to (0,0,N)
//!   /quit | /exit   – leave the console

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sweepos_core::CommandInterpreter;
use sweepos_hal::SimHandles;
use sweepos_types::{Event, EventPayload, RobotError};

const JOURNAL_SOURCE: &str = "sweepos-cli::repl";

/// Entry point for the interactive console.
///
/// `shutdown` is polled each iteration; when set the loop exits cleanly.
pub fn run(interpreter: &mut CommandInterpreter, handles: &SimHandles, shutdown: Arc<AtomicBool>) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut journal: Vec<Event> = Vec::new();

    loop {
        if shutdown.load(Ordering::SeqCst) {
            break;
        }

        print!("{} ", "sweepos>".bold().cyan());
        stdout.flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("{}: {}", "Read error".red(), e);
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/help" => cmd_help(),
            "/status" => cmd_status(interpreter),
            "/history" => cmd_history(&journal),
            "/reset" => {
                interpreter.initialize();
                cmd_status(interpreter);
            }
            "/quit" | "/exit" => {
                shutdown.store(true, Ordering::SeqCst);
                break;
            }
            other if other.starts_with("/battery") => cmd_battery(other, handles),
            other if other.starts_with("/obstacle") => cmd_obstacle(other, handles),
            other if other.starts_with('/') => {
                println!(
                    "{} '{}'. Type {} for available commands.",
                    "Unknown command:".red(),
                    other.yellow(),
                    "/help".bold()
                );
            }
            symbols => run_symbols(interpreter, symbols, &mut journal),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Command handlers
// ─────────────────────────────────────────────────────────────────────────────

fn cmd_help() {
    println!();
    println!("{}", "SweepOS Commands".bold().underline());
    println!("  {}            – move forward / turn left / turn right", "f l r".bold().cyan());
    println!("  {}          – read the robot status string", "/status".bold().cyan());
    println!("  {}   – set the simulated battery level", "/battery <pct>".bold().cyan());
    println!("  {} – place or clear the simulated obstacle", "/obstacle on|off".bold().cyan());
    println!("  {}         – dump the telemetry journal", "/history".bold().cyan());
    println!("  {}           – re-initialize the robot at (0,0,N)", "/reset".bold().cyan());
    println!("  {}      – leave the console", "/quit  /exit".bold().cyan());
    println!();
}

fn cmd_status(interpreter: &mut CommandInterpreter) {
    match interpreter.status() {
        Ok(status) => println!("  {}", status.bold()),
        Err(e) => println!("{}: {}", "Status unavailable".red(), e),
    }
}

fn cmd_battery(input: &str, handles: &SimHandles) {
    match parse_percent(input.trim_start_matches("/battery")) {
        Some(percent) => {
            handles.set_battery_percent(percent);
            println!("  Battery gauge set to {}%", percent.to_string().yellow());
        }
        None => println!(
            "{} usage: {}",
            "Invalid level.".red(),
            "/battery <0-100>".bold()
        ),
    }
}

fn cmd_obstacle(input: &str, handles: &SimHandles) {
    match parse_switch(input.trim_start_matches("/obstacle")) {
        Some(present) => {
            handles.set_obstacle_present(present);
            if present {
                println!("  Obstacle placed in front of the robot.");
            } else {
                println!("  Obstacle cleared.");
            }
        }
        None => println!(
            "{} usage: {}",
            "Invalid switch.".red(),
            "/obstacle on|off".bold()
        ),
    }
}

fn cmd_history(journal: &[Event]) {
    if journal.is_empty() {
        println!("  Journal is empty.");
        return;
    }
    for event in journal {
        match serde_json::to_string(event) {
            Ok(line) => println!("  {}", line),
            Err(e) => println!("{}: {}", "Journal entry unreadable".red(), e),
        }
    }
}

/// Forward every symbol of `symbols` to the interpreter, stopping the
/// sequence at the first error.
fn run_symbols(interpreter: &mut CommandInterpreter, symbols: &str, journal: &mut Vec<Event>) {
    for symbol in symbols.chars() {
        let was_low = interpreter.state().battery_low();

        let result = interpreter.execute(symbol);

        let is_low = interpreter.state().battery_low();
        if was_low != is_low {
            journal.push(Event::now(
                JOURNAL_SOURCE,
                EventPayload::PowerTransition { battery_low: is_low },
            ));
            if is_low {
                println!("{}", "  ⚠  Battery low – recharging, robot immobilised.".yellow());
            }
        }

        match result {
            Ok(status) => {
                println!("  {} {}", symbol.to_string().dimmed(), status.bold());
                journal.push(Event::now(
                    JOURNAL_SOURCE,
                    EventPayload::CommandExecuted { symbol, status },
                ));
            }
            Err(e @ RobotError::BlockedByObstacle { .. }) => {
                println!("  {} {}", symbol.to_string().dimmed(), e.to_string().yellow());
                journal.push(Event::now(
                    JOURNAL_SOURCE,
                    EventPayload::Fault {
                        message: e.to_string(),
                    },
                ));
                break;
            }
            Err(e) => {
                println!("  {} {}", symbol.to_string().dimmed(), e.to_string().red());
                journal.push(Event::now(
                    JOURNAL_SOURCE,
                    EventPayload::Fault {
                        message: e.to_string(),
                    },
                ));
                break;
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a battery percentage argument; accepts `0..=100` only.
fn parse_percent(arg: &str) -> Option<u8> {
    match arg.trim().parse::<u8>() {
        Ok(v) if v <= 100 => Some(v),
        _ => None,
    }
}

/// Parse an on/off switch argument.
fn parse_switch(arg: &str) -> Option<bool> {
    match arg.trim() {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_argument_bounds() {
        assert_eq!(parse_percent(" 42 "), Some(42));
        assert_eq!(parse_percent("0"), Some(0));
        assert_eq!(parse_percent("100"), Some(100));
        assert_eq!(parse_percent("101"), None);
        assert_eq!(parse_percent("-1"), None);
        assert_eq!(parse_percent("lots"), None);
    }

    #[test]
    fn switch_argument_values() {
        assert_eq!(parse_switch(" on"), Some(true));
        assert_eq!(parse_switch("off "), Some(false));
        assert_eq!(parse_switch("maybe"), None);
        assert_eq!(parse_switch(""), None);
    }
}
