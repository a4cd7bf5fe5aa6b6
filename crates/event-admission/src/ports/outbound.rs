//! # Outbound Ports
//!
//! Traits for external dependencies: the source chain client and the
//! record store.

use crate::domain::{
    ChainAddress, ClientError, EventRecord, EventRecordMessage, Sequence, SourceChainKind, TxHash,
};
use async_trait::async_trait;

/// A confirmed transaction receipt fetched from a source chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Block height the transaction was included at.
    pub block_number: u64,
}

/// A bridge event decoded from a receipt log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBridgeEvent {
    /// Event identifier assigned on the source chain.
    pub id: u64,
    /// Contract the log was emitted by.
    pub contract_address: ChainAddress,
    /// Opaque event data.
    pub data: Vec<u8>,
}

impl DecodedBridgeEvent {
    /// Field-for-field comparison against a proposed message.
    ///
    /// Equality on id, contract address, and payload is what turns a vote
    /// into Yes; any mismatch is a No.
    pub fn matches(&self, message: &EventRecordMessage) -> bool {
        self.id == message.record_id
            && self.contract_address == message.contract_address
            && self.data == message.payload
    }
}

/// Source chain client - outbound port.
///
/// All calls are fallible and externally latent; an empty or failed lookup
/// is interpreted by the verifier as an abstention, never retried here.
#[async_trait]
pub trait RootChainClient: Send + Sync {
    /// Fetch the receipt for `tx_hash`, requiring at least `confirmations`
    /// blocks on top of it. `None` when unconfirmed or unknown.
    async fn confirmed_receipt(
        &self,
        tx_hash: &TxHash,
        confirmations: u64,
        kind: SourceChainKind,
    ) -> Result<Option<Receipt>, ClientError>;

    /// Fetch a Tron receipt by transaction hash directly.
    async fn tron_receipt(&self, tx_hash: &TxHash) -> Result<Option<Receipt>, ClientError>;

    /// Decode the bridge event at `log_index` from a receipt, filtered to
    /// logs emitted by `contract`. `None` when the log is absent or does
    /// not match the bridge event schema.
    async fn decode_bridge_event(
        &self,
        contract: &ChainAddress,
        receipt: &Receipt,
        log_index: u64,
    ) -> Result<Option<DecodedBridgeEvent>, ClientError>;
}

/// Record store - outbound port.
///
/// Write operations take `&mut self`; the committer serializes all access
/// behind a single lock, so check-then-write steps never interleave.
pub trait RecordStore: Send {
    /// Committed record by identifier alone.
    fn record(&self, id: u64) -> Option<EventRecord>;

    /// Committed record by identifier and source chain kind.
    fn record_by_chain(&self, id: u64, kind: SourceChainKind) -> Option<EventRecord>;

    /// Whether a sequence has already been committed.
    fn has_sequence(&self, sequence: &Sequence) -> bool;

    /// Mark a sequence as committed. Append-only.
    fn set_sequence(&mut self, sequence: &Sequence);

    /// Current value of the monotone identifier counter.
    fn latest_id(&self) -> u64;

    /// Advance the identifier counter.
    fn set_latest_id(&mut self, id: u64);

    /// Local canonical identifier mapped from a root chain record id.
    fn local_id_by_root(&self, kind: SourceChainKind, root_id: u64) -> Option<u64>;

    /// Map a root chain record id to its local canonical identifier.
    fn set_local_id(&mut self, kind: SourceChainKind, root_id: u64, local_id: u64);

    /// Persist a committed record under both lookup keys.
    fn put_record(&mut self, record: EventRecord);
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Programmable source chain client for tests.
#[derive(Clone, Default)]
pub struct MockRootChainClient {
    /// Receipt returned by `confirmed_receipt`.
    pub receipt: Option<Receipt>,
    /// Receipt returned by `tron_receipt`.
    pub tron_receipt: Option<Receipt>,
    /// Event returned by `decode_bridge_event`.
    pub event: Option<DecodedBridgeEvent>,
    /// Artificial latency applied to every call, in milliseconds.
    pub latency_ms: Option<u64>,
    /// Fail every call with a network error?
    pub should_fail: bool,
}

impl MockRootChainClient {
    async fn settle(&self) -> Result<(), ClientError> {
        if let Some(ms) = self.latency_ms {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        }
        if self.should_fail {
            return Err(ClientError::Network("mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RootChainClient for MockRootChainClient {
    async fn confirmed_receipt(
        &self,
        _tx_hash: &TxHash,
        _confirmations: u64,
        _kind: SourceChainKind,
    ) -> Result<Option<Receipt>, ClientError> {
        self.settle().await?;
        Ok(self.receipt.clone())
    }

    async fn tron_receipt(&self, _tx_hash: &TxHash) -> Result<Option<Receipt>, ClientError> {
        self.settle().await?;
        Ok(self.tron_receipt.clone())
    }

    async fn decode_bridge_event(
        &self,
        _contract: &ChainAddress,
        _receipt: &Receipt,
        _log_index: u64,
    ) -> Result<Option<DecodedBridgeEvent>, ClientError> {
        self.settle().await?;
        Ok(self.event.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, EventRecordMessageParams};

    fn message_for(event: &DecodedBridgeEvent) -> EventRecordMessage {
        EventRecordMessage::new(EventRecordMessageParams {
            sender: AccountId::new([1u8; 20]),
            source_tx_hash: TxHash::new([2u8; 32]),
            log_index: 10,
            block_number: 599,
            record_id: event.id,
            contract_address: event.contract_address.clone(),
            payload: event.data.clone(),
            destination_chain_tag: "devnet".to_string(),
            source_chain_kind: SourceChainKind::Eth,
        })
    }

    #[test]
    fn test_decoded_event_matches_message() {
        let event = DecodedBridgeEvent {
            id: 7,
            contract_address: ChainAddress::new(SourceChainKind::Eth, [3u8; 20]),
            data: vec![1, 2, 3],
        };
        let msg = message_for(&event);
        assert!(event.matches(&msg));
    }

    #[test]
    fn test_decoded_event_mismatch_on_any_field() {
        let event = DecodedBridgeEvent {
            id: 7,
            contract_address: ChainAddress::new(SourceChainKind::Eth, [3u8; 20]),
            data: vec![1, 2, 3],
        };
        let base = message_for(&event);

        let mut perturbed = base.clone();
        perturbed.record_id += 1;
        assert!(!event.matches(&perturbed));

        let mut perturbed = base.clone();
        perturbed.contract_address = ChainAddress::new(SourceChainKind::Eth, [4u8; 20]);
        assert!(!event.matches(&perturbed));

        let mut perturbed = base;
        perturbed.payload = vec![9];
        assert!(!event.matches(&perturbed));
    }

    #[tokio::test]
    async fn test_mock_client_returns_configured_receipt() {
        let client = MockRootChainClient {
            receipt: Some(Receipt { block_number: 599 }),
            ..Default::default()
        };
        let receipt = client
            .confirmed_receipt(&TxHash::new([1u8; 32]), 12, SourceChainKind::Eth)
            .await
            .unwrap();
        assert_eq!(receipt, Some(Receipt { block_number: 599 }));
    }

    #[tokio::test]
    async fn test_mock_client_failure() {
        let client = MockRootChainClient {
            should_fail: true,
            ..Default::default()
        };
        assert!(client.tron_receipt(&TxHash::new([1u8; 32])).await.is_err());
    }
}
