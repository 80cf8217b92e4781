//! Ledger configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Ledger`](crate::Ledger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Buyer name recorded in the genesis block.
    pub genesis_buyer: String,

    /// Event name recorded in the genesis block.
    pub genesis_event: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            genesis_buyer: "System".to_string(),
            genesis_event: "Genesis Event".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: LedgerConfig = serde_json::from_str(r#"{"genesis_event":"Launch"}"#).unwrap();
        assert_eq!(config.genesis_buyer, "System");
        assert_eq!(config.genesis_event, "Launch");
    }
}
