//! Static Chain Client Adapter
//!
//! Implements the `RootChainClient` port over pre-loaded receipts and
//! events. In production this is replaced by an RPC-backed client; the
//! static adapter is the deterministic stand-in for demos and integration
//! tests.

use crate::domain::{ChainAddress, ClientError, SourceChainKind, TxHash};
use crate::ports::outbound::{DecodedBridgeEvent, Receipt, RootChainClient};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

struct SeededReceipt {
    receipt: Receipt,
    confirmations: u64,
}

/// Chain client serving seeded data.
#[derive(Default)]
pub struct StaticChainClient {
    receipts: RwLock<HashMap<(SourceChainKind, TxHash), SeededReceipt>>,
    /// Events keyed by `(block_number, log_index)`, tagged with the
    /// contract that emitted the log.
    events: RwLock<HashMap<(u64, u64), (ChainAddress, DecodedBridgeEvent)>>,
}

impl StaticChainClient {
    /// Create an empty client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a receipt with the number of confirmations it has accrued.
    pub fn seed_receipt(
        &self,
        kind: SourceChainKind,
        tx_hash: TxHash,
        receipt: Receipt,
        confirmations: u64,
    ) {
        self.receipts.write().insert(
            (kind, tx_hash),
            SeededReceipt {
                receipt,
                confirmations,
            },
        );
    }

    /// Seed a bridge event emitted by `emitter` at a log position.
    pub fn seed_event(
        &self,
        emitter: ChainAddress,
        block_number: u64,
        log_index: u64,
        event: DecodedBridgeEvent,
    ) {
        self.events
            .write()
            .insert((block_number, log_index), (emitter, event));
    }
}

#[async_trait]
impl RootChainClient for StaticChainClient {
    async fn confirmed_receipt(
        &self,
        tx_hash: &TxHash,
        confirmations: u64,
        kind: SourceChainKind,
    ) -> Result<Option<Receipt>, ClientError> {
        debug!(%tx_hash, %kind, confirmations, "looking up confirmed receipt");

        let receipts = self.receipts.read();
        Ok(receipts
            .get(&(kind, tx_hash.clone()))
            .filter(|seeded| seeded.confirmations >= confirmations)
            .map(|seeded| seeded.receipt.clone()))
    }

    async fn tron_receipt(&self, tx_hash: &TxHash) -> Result<Option<Receipt>, ClientError> {
        debug!(%tx_hash, "looking up tron receipt");

        let receipts = self.receipts.read();
        Ok(receipts
            .get(&(SourceChainKind::Tron, tx_hash.clone()))
            .map(|seeded| seeded.receipt.clone()))
    }

    async fn decode_bridge_event(
        &self,
        contract: &ChainAddress,
        receipt: &Receipt,
        log_index: u64,
    ) -> Result<Option<DecodedBridgeEvent>, ClientError> {
        debug!(%contract, block_number = receipt.block_number, log_index, "decoding bridge event");

        let events = self.events.read();
        Ok(events
            .get(&(receipt.block_number, log_index))
            .filter(|(emitter, _)| emitter == contract)
            .map(|(_, event)| event.clone()))
    }
}
