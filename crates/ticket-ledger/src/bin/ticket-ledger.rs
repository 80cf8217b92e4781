//! Interactive ticket issuing and verification.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ticket_ledger::config::usage;
use ticket_ledger::{CliConfig, Command, Ledger, Menu};

fn main() -> anyhow::Result<()> {
    let config = match CliConfig::from_env().apply_args(std::env::args().skip(1))? {
        Command::Run(config) => config,
        Command::Help => {
            print!("{}", usage());
            return Ok(());
        }
    };

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    // One ledger for the life of the process, handed to the menu explicitly.
    let mut ledger = Ledger::with_config(config.ledger.clone());
    info!(genesis = %ledger.genesis().hash, "ledger ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock()).json_listing(config.json_listing);
    menu.run(&mut ledger).context("menu session failed")?;

    info!(tickets = ledger.ticket_count(), valid = ledger.validate(), "session ended");
    Ok(())
}
