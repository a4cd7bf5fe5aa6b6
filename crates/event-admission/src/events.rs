//! # Domain Events
//!
//! Events emitted toward downstream indexing and notification.

use crate::domain::{ChainAddress, EventRecord, EventRecordMessage, SourceChainKind};
use serde::{Deserialize, Serialize};

/// Emitted exactly once per successful commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCommitted {
    /// Committed record identifier.
    pub record_id: u64,
    /// Emitting contract address.
    pub contract_address: ChainAddress,
    /// Opaque event data.
    pub payload: Vec<u8>,
    /// Source chain the event originated on.
    pub source_chain_kind: SourceChainKind,
    /// Destination execution context the payload targets.
    pub destination_chain_tag: String,
    /// Committing block time.
    pub recorded_at: u64,
}

impl RecordCommitted {
    /// Build the event for a record committed from `message`.
    pub fn new(message: &EventRecordMessage, record: &EventRecord) -> Self {
        Self {
            record_id: record.record_id,
            contract_address: record.contract_address.clone(),
            payload: record.payload.clone(),
            source_chain_kind: record.source_chain_kind,
            destination_chain_tag: message.destination_chain_tag.clone(),
            recorded_at: record.recorded_at,
        }
    }
}
