//! # Admission Configuration
//!
//! Parameters consumed by the verifier and committer. Sourced from
//! external configuration and passed in at construction; nothing here is
//! fetched from ambient state.

use crate::domain::{ChainAddress, SourceChainKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Admission configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdmissionConfig {
    /// Confirmation depth required for Ethereum receipts.
    pub eth_confirmations: u64,
    /// Confirmation depth required for BSC receipts.
    pub bsc_confirmations: u64,
    /// Bridge contract address per source chain kind.
    pub bridge_contracts: HashMap<SourceChainKind, ChainAddress>,
    /// Destination execution context served by this deployment.
    pub destination_chain_tag: String,
    /// Upper bound on any single external chain client call.
    pub rpc_timeout: Duration,
}

impl AdmissionConfig {
    /// Required confirmation depth for a chain kind.
    ///
    /// Tron receipts are looked up by transaction hash directly and carry
    /// no depth parameter; internal kinds fetch no receipt at all.
    pub fn confirmations(&self, kind: SourceChainKind) -> u64 {
        match kind {
            SourceChainKind::Eth => self.eth_confirmations,
            SourceChainKind::Bsc => self.bsc_confirmations,
            SourceChainKind::Tron | SourceChainKind::Stake => 0,
        }
    }

    /// Bridge contract configured for a chain kind, if any.
    pub fn bridge_contract(&self, kind: SourceChainKind) -> Option<&ChainAddress> {
        self.bridge_contracts.get(&kind)
    }

    /// Register a bridge contract for its chain kind.
    pub fn with_bridge_contract(mut self, contract: ChainAddress) -> Self {
        self.bridge_contracts.insert(contract.kind, contract);
        self
    }
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            eth_confirmations: 12,
            bsc_confirmations: 15,
            bridge_contracts: HashMap::new(),
            destination_chain_tag: "devnet".to_string(),
            rpc_timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_confirmations() {
        let config = AdmissionConfig::default();
        assert_eq!(config.confirmations(SourceChainKind::Eth), 12);
        assert_eq!(config.confirmations(SourceChainKind::Bsc), 15);
        assert_eq!(config.confirmations(SourceChainKind::Tron), 0);
    }

    #[test]
    fn test_bridge_contract_registration() {
        let contract = ChainAddress::new(SourceChainKind::Eth, [9u8; 20]);
        let config = AdmissionConfig::default().with_bridge_contract(contract.clone());
        assert_eq!(config.bridge_contract(SourceChainKind::Eth), Some(&contract));
        assert!(config.bridge_contract(SourceChainKind::Tron).is_none());
    }
}
