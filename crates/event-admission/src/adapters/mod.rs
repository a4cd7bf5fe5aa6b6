//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for event admission.

mod chain_client;
mod record_store;

pub use chain_client::StaticChainClient;
pub use record_store::InMemoryRecordStore;
