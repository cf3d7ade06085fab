//! Archetype bonus host harness.
//!
//! Loads the bonus configuration the way a host would (see
//! [`client_bootstrap::BootstrapConfig::from_env`]), runs one character-load
//! event, and prints the result.
//!
//! ```bash
//! archetype detect --race-code 4 --token body_elemental_fire
//! archetype bonuses --race-code 2 --token body_amari_wolf --json
//! archetype resolve --race-code 6 --stat AttackDamage --value 10
//! archetype grant --race-code 0 --kind currency --amount 100
//! ```

mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use client_bootstrap::{BootstrapConfig, EngineBuilder};
use commands::{Bonuses, Detect, Grant, Resolve};

/// Archetype detection and bonus resolution
#[derive(Parser)]
#[command(name = "archetype")]
#[command(about = "Inspect archetype detection and stat bonuses", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Detect the archetype of a character
    Detect(Detect),

    /// List the bonuses of a character's archetype
    Bonuses(Bonuses),

    /// Resolve one stat value through the bonus table
    Resolve(Resolve),

    /// Apply an experience or currency grant
    Grant(Grant),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BootstrapConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let setup = EngineBuilder::new(config).build()?;
    tracing::debug!(source = %setup.source, issues = setup.issues.len(), "engine ready");

    let engine = setup.engine.as_ref();
    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Detect(cmd) => cmd.execute(engine, &mut out),
        Command::Bonuses(cmd) => cmd.execute(engine, &mut out),
        Command::Resolve(cmd) => cmd.execute(engine, &mut out),
        Command::Grant(cmd) => cmd.execute(engine, &mut out),
    }
}
