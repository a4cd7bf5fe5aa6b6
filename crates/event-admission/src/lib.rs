//! # Event Admission
//!
//! Cross-chain event admission: a deterministic set of validating nodes
//! independently re-verifies an event observed on an external source chain,
//! votes on it during block proposal, and commits it exactly once into
//! local consensus state.
//!
//! ## Purpose
//!
//! - Per-node verification re-derivable from untrusted external data, with
//!   no inter-validator communication
//! - Replay safety across source chains with different addressing schemes
//! - Resilience to external RPC failures without stalling consensus
//!
//! ## Module Structure
//!
//! ```text
//! event-admission/
//! ├── domain/          # Message, record, votes, errors
//! ├── algorithms/      # Sequence (replay identity) function
//! ├── ports/           # AdmissionApi, RootChainClient, RecordStore
//! ├── adapters/        # In-memory store, static chain client
//! └── service.rs       # Verifier (side handler) + committer (post handler)
//! ```
//!
//! Vote aggregation is an external collaborator: the verifier produces a
//! per-node vote, and the committer consumes a single aggregated outcome.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryRecordStore, StaticChainClient};
pub use algorithms::calculate_sequence;
pub use config::AdmissionConfig;
pub use domain::{
    AccountId, AdmissionError, ChainAddress, ClientError, EventRecord, EventRecordMessage,
    EventRecordMessageParams, Sequence, SkipReason, SourceChainKind, TxHash, Vote, VoteOutcome,
};
pub use events::RecordCommitted;
pub use ports::{
    AdmissionApi, DecodedBridgeEvent, MockRootChainClient, Receipt, RecordStore, RootChainClient,
};
pub use service::AdmissionService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
