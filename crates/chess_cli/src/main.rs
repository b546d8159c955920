//! Two-player chess in the terminal.
//!
//! Usage:
//!   chess [--config <file>]
//!
//! Settings default to `chess.toml` in the working directory when present.
//! Logs go to stderr; `RUST_LOG` overrides the configured filter.

mod command;
mod config;
mod render;
mod session;

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chess_core::Game;
use tracing_subscriber::EnvFilter;

use config::Config;

fn print_usage() {
    println!("Two-player terminal chess");
    println!();
    println!("Usage:");
    println!("  chess [--config <file>]");
    println!();
    println!("Settings are read from <file>, or from ./{} if it exists.", config::DEFAULT_CONFIG_FILE);
}

/// `Ok(None)` when only help was requested.
fn parse_args(args: &[String]) -> Result<Option<Option<PathBuf>>> {
    let mut config_path = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(p) = args.get(i + 1) else {
                    bail!("--config needs a file name");
                };
                config_path = Some(PathBuf::from(p));
                i += 1;
            }
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument {other:?}"),
        }
        i += 1;
    }
    Ok(Some(config_path))
}

fn init_logging(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(&config.log.filter)
            .with_context(|| format!("bad log filter {:?}", config.log.filter))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config_path) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let config = Config::resolve(config_path.as_deref())?;
    init_logging(&config)?;
    tracing::debug!(?config, "settings loaded");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    session::run(Game::new(), &mut input, &mut stdout, &config)?;
    stdout.flush()?;
    Ok(())
}
