//! `sweepos-cli` – SweepOS Command Console
//!
//! This binary is the operator's entry point to the cleaning-robot stack. It:
//!
//! 1. Loads `~/.sweepos/config.toml` (writing defaults on first run).
//! 2. Assembles a fully simulated hardware rig from the config.
//! 3. Drops the operator into an **interactive console** where `f`/`l`/`r`
//!    drive the robot and slash-commands steer the simulated sensors.
//! 4. Intercepts **Ctrl-C** and de-energises the power relays before exit.

mod config;
mod repl;

use colored::Colorize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

use sweepos_core::CommandInterpreter;
use sweepos_hal::SimRig;

fn main() {
    // ── Structured logging ────────────────────────────────────────────────
    // Initialise tracing-subscriber using RUST_LOG (defaults to "info").
    // Set SWEEPOS_LOG_FORMAT=json to emit newline-delimited JSON logs
    // suitable for log aggregators. The console's user-facing output still
    // uses println! for UX consistency.
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if std::env::var("SWEEPOS_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .init();
    }

    print_banner();

    // ── Shared shutdown flag ──────────────────────────────────────────────
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_clone = shutdown.clone();

    // ── Ctrl-C handler ────────────────────────────────────────────────────
    if let Err(e) = ctrlc::set_handler(move || {
        println!();
        println!("{}", "⚠  Ctrl-C received – stopping the robot …".yellow().bold());
        shutdown_clone.store(true, Ordering::SeqCst);
    }) {
        warn!(error = %e, "Failed to install Ctrl-C handler; graceful shutdown on Ctrl-C will not be available");
    }

    // ── Configuration ─────────────────────────────────────────────────────
    let cfg = match config::load() {
        Ok(Some(cfg)) => {
            println!(
                "  Config loaded from {}",
                config::config_path().display().to_string().bold()
            );
            cfg
        }
        Ok(None) => {
            let cfg = config::Config::default();
            match config::save(&cfg) {
                Ok(()) => println!(
                    "  No config found – wrote defaults to {}",
                    config::config_path().display().to_string().bold()
                ),
                Err(e) => println!("{}: {}", "Error saving config".red(), e),
            }
            cfg
        }
        Err(e) => {
            println!("{}: {}", "Config error".red(), e);
            println!("  Using default configuration.");
            config::Config::default()
        }
    };

    // ── Simulated hardware rig ────────────────────────────────────────────
    let (rig, handles) = SimRig::new()
        .with_battery_percent(cfg.start_battery_percent.min(100))
        .build();

    let mut interpreter = CommandInterpreter::new(rig, cfg.room_x, cfg.room_y);
    interpreter.initialize();

    match interpreter.status() {
        Ok(status) => println!(
            "  Robot ready at {} in a {}×{} cell room, battery {}%.",
            status.bold(),
            cfg.room_x,
            cfg.room_y,
            cfg.start_battery_percent.min(100)
        ),
        Err(e) => println!("{}: {}", "Status unavailable".red(), e),
    }

    println!();
    println!("  Type {} for a list of commands.\n", "/help".bold().cyan());

    // ── Interactive console ───────────────────────────────────────────────
    repl::run(&mut interpreter, &handles, shutdown);

    // ── Safe stop ─────────────────────────────────────────────────────────
    match interpreter.safe_stop() {
        Ok(()) => {
            println!("{}", "  ✓ Power relays de-energised.".green());
            println!("{}", "  ✓ Exiting SweepOS.".green());
        }
        Err(e) => println!("{}: {}", "Safe stop failed".red(), e),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Banner
// ─────────────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("{}", r#"   ____                      ____  ____"#.bold().cyan());
    println!("{}", r#"  / __/    _____ ___ ___    / __ \/ __/"#.bold().cyan());
    println!("{}", r#" _\ \ | |/|/ / -_) -_) _ \ / /_/ /\ \  "#.bold().cyan());
    println!("{}", r#"/___/ |__,__/\__/\__/ .__/ \____/___/  "#.bold().cyan());
    println!("{}", r#"                   /_/                 "#.bold().cyan());
    println!();
    println!(
        "  {} {}",
        "SweepOS".bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!("  Cleaning Robot Command Console");
    println!();
}
