//! # Ports Module
//!
//! Hexagonal architecture ports (inbound API, outbound dependencies).

pub mod inbound;
pub mod outbound;

pub use inbound::AdmissionApi;
pub use outbound::{
    DecodedBridgeEvent, MockRootChainClient, Receipt, RecordStore, RootChainClient,
};
