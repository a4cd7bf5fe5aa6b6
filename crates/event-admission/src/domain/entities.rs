//! # Domain Entities
//!
//! The proposed message and the committed record.

use super::errors::AdmissionError;
use super::value_objects::{AccountId, ChainAddress, SourceChainKind, TxHash};
use serde::{Deserialize, Serialize};

/// A proposed cross-chain event, ephemeral per proposal.
///
/// Never persisted as such; a matching [`EventRecord`] is created exactly
/// once at commit time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecordMessage {
    /// Account that submitted the proposal.
    pub sender: AccountId,
    /// Transaction on the source chain containing the event.
    pub source_tx_hash: TxHash,
    /// Position of the log entry within the transaction receipt.
    pub log_index: u64,
    /// Source chain block height containing the event.
    pub block_number: u64,
    /// Submitter-proposed record identifier.
    pub record_id: u64,
    /// Address of the emitting contract, per the source chain's encoding.
    pub contract_address: ChainAddress,
    /// Opaque event data, interpreted downstream.
    pub payload: Vec<u8>,
    /// Destination execution context the payload targets.
    pub destination_chain_tag: String,
    /// Which external client behavior and address space applies.
    pub source_chain_kind: SourceChainKind,
}

/// Constructor parameters for [`EventRecordMessage`].
#[derive(Clone, Debug)]
pub struct EventRecordMessageParams {
    /// Submitting account.
    pub sender: AccountId,
    /// Source chain transaction hash.
    pub source_tx_hash: TxHash,
    /// Log position within the receipt.
    pub log_index: u64,
    /// Source chain block height.
    pub block_number: u64,
    /// Proposed record identifier.
    pub record_id: u64,
    /// Emitting contract address.
    pub contract_address: ChainAddress,
    /// Opaque event data.
    pub payload: Vec<u8>,
    /// Destination chain tag.
    pub destination_chain_tag: String,
    /// Source chain kind.
    pub source_chain_kind: SourceChainKind,
}

impl EventRecordMessage {
    /// Construct a message from its parts.
    pub fn new(params: EventRecordMessageParams) -> Self {
        Self {
            sender: params.sender,
            source_tx_hash: params.source_tx_hash,
            log_index: params.log_index,
            block_number: params.block_number,
            record_id: params.record_id,
            contract_address: params.contract_address,
            payload: params.payload,
            destination_chain_tag: params.destination_chain_tag,
            source_chain_kind: params.source_chain_kind,
        }
    }

    /// Basic structural validation, applied before any verification.
    pub fn validate_basic(&self) -> Result<(), AdmissionError> {
        if self.sender.is_empty() {
            return Err(AdmissionError::UnknownRequest("missing sender address"));
        }
        if self.source_tx_hash.is_empty() {
            return Err(AdmissionError::UnknownRequest("missing tx hash"));
        }
        Ok(())
    }
}

/// A committed event record, immutable and never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Record identifier, as proposed on the source chain.
    pub record_id: u64,
    /// Emitting contract address.
    pub contract_address: ChainAddress,
    /// Opaque event data.
    pub payload: Vec<u8>,
    /// Source chain the event originated on.
    pub source_chain_kind: SourceChainKind,
    /// Committing block time.
    pub recorded_at: u64,
}

impl EventRecord {
    /// Materialize the committed form of a message at `recorded_at`.
    pub fn from_message(message: &EventRecordMessage, recorded_at: u64) -> Self {
        Self {
            record_id: message.record_id,
            contract_address: message.contract_address.clone(),
            payload: message.payload.clone(),
            source_chain_kind: message.source_chain_kind,
            recorded_at,
        }
    }
}
