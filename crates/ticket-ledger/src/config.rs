//! CLI configuration: defaults, environment variables, and arguments.

use serde::{Deserialize, Serialize};

use ticket_ledger_core::LedgerConfig;

use crate::error::{CliError, Result};

/// Environment variable holding the tracing filter directive.
pub const ENV_LOG: &str = "TICKET_LEDGER_LOG";
/// Environment variable overriding the genesis buyer name.
pub const ENV_GENESIS_BUYER: &str = "TICKET_LEDGER_GENESIS_BUYER";
/// Environment variable overriding the genesis event name.
pub const ENV_GENESIS_EVENT: &str = "TICKET_LEDGER_GENESIS_EVENT";

/// Configuration for the `ticket-ledger` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,

    /// Print the ticket listing as JSON instead of text.
    pub json_listing: bool,

    /// Ledger configuration.
    pub ledger: LedgerConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            json_listing: false,
            ledger: LedgerConfig::default(),
        }
    }
}

/// What the binary should do after parsing arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive menu.
    Run(CliConfig),
    /// Print usage and exit.
    Help,
}

impl CliConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }

        if let Some(buyer) = lookup(ENV_GENESIS_BUYER) {
            config.ledger.genesis_buyer = buyer;
        }

        if let Some(event) = lookup(ENV_GENESIS_EVENT) {
            config.ledger.genesis_event = event;
        }

        config
    }

    /// Apply command-line arguments (program name already removed).
    pub fn apply_args<I, S>(mut self, args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "--json" => self.json_listing = true,
                "-h" | "--help" => return Ok(Command::Help),
                other => return Err(CliError::UnknownArgument(other.to_string())),
            }
        }
        Ok(Command::Run(self))
    }
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "Usage: ticket-ledger [--json]\n\
         \n\
         Interactive ticket issuing and verification on a hash-linked ledger.\n\
         \n\
         Options:\n  \
           --json      print the ticket listing as JSON\n  \
           -h, --help  show this message\n\
         \n\
         Environment:\n  \
           {ENV_LOG}              tracing filter (default: warn)\n  \
           {ENV_GENESIS_BUYER}    genesis buyer name (default: System)\n  \
           {ENV_GENESIS_EVENT}    genesis event name (default: Genesis Event)\n"
    )
}
