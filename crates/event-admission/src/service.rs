//! # Admission Service
//!
//! The verifier (side handler) and committer (post handler) for proposed
//! cross-chain event records.

use crate::algorithms::calculate_sequence;
use crate::config::AdmissionConfig;
use crate::domain::{
    AdmissionError, ClientError, EventRecord, EventRecordMessage, SkipReason, SourceChainKind,
    Vote, VoteOutcome,
};
use crate::events::RecordCommitted;
use crate::ports::inbound::AdmissionApi;
use crate::ports::outbound::{DecodedBridgeEvent, Receipt, RecordStore, RootChainClient};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::cmp;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Event admission service.
///
/// Verification is read-only and may run for many messages concurrently;
/// commit serializes on the store lock, one state transition at a time.
pub struct AdmissionService {
    config: AdmissionConfig,
    client: Arc<dyn RootChainClient>,
    store: Mutex<Box<dyn RecordStore>>,
}

impl AdmissionService {
    /// Create a service over an external chain client and a record store.
    pub fn new(
        config: AdmissionConfig,
        client: Arc<dyn RootChainClient>,
        store: Box<dyn RecordStore>,
    ) -> Self {
        Self {
            config,
            client,
            store: Mutex::new(store),
        }
    }

    /// Read access to the underlying store.
    pub fn with_store<R>(&self, f: impl FnOnce(&dyn RecordStore) -> R) -> R {
        let store = self.store.lock();
        f(&**store)
    }

    /// Run one external chain call under the configured RPC bound.
    ///
    /// Timeout and transport failures both resolve to an abstention: the
    /// evidence is not yet decidable and a later resubmission will retry.
    async fn bounded<T, F>(&self, call: &'static str, fut: F) -> Result<Option<T>, SkipReason>
    where
        F: Future<Output = Result<Option<T>, ClientError>> + Send,
    {
        match tokio::time::timeout(self.config.rpc_timeout, fut).await {
            Err(_) => {
                warn!(call, "external chain call exceeded the RPC bound");
                Err(SkipReason::Timeout)
            }
            Ok(Err(err)) => {
                warn!(call, %err, "external chain call failed");
                Err(SkipReason::Unconfirmed)
            }
            Ok(Ok(value)) => Ok(value),
        }
    }

    async fn fetch_receipt(&self, message: &EventRecordMessage) -> Result<Receipt, SkipReason> {
        let kind = message.source_chain_kind;
        let receipt = match kind {
            SourceChainKind::Tron => {
                self.bounded("tron_receipt", self.client.tron_receipt(&message.source_tx_hash))
                    .await?
            }
            _ => {
                self.bounded(
                    "confirmed_receipt",
                    self.client.confirmed_receipt(
                        &message.source_tx_hash,
                        self.config.confirmations(kind),
                        kind,
                    ),
                )
                .await?
            }
        };
        receipt.ok_or_else(|| {
            debug!(tx_hash = %message.source_tx_hash, %kind, "no confirmed receipt");
            SkipReason::Unconfirmed
        })
    }

    async fn verify_bridge_event(&self, message: &EventRecordMessage) -> Vote {
        let kind = message.source_chain_kind;
        let Some(bridge) = self.config.bridge_contract(kind) else {
            warn!(%kind, "no bridge contract configured, abstaining");
            return Vote::Skip(SkipReason::Unconfigured);
        };

        let receipt = match self.fetch_receipt(message).await {
            Ok(receipt) => receipt,
            Err(reason) => return Vote::Skip(reason),
        };

        let decoded: DecodedBridgeEvent = match self
            .bounded(
                "decode_bridge_event",
                self.client
                    .decode_bridge_event(bridge, &receipt, message.log_index),
            )
            .await
        {
            Err(reason) => return Vote::Skip(reason),
            Ok(None) => {
                debug!(
                    tx_hash = %message.source_tx_hash,
                    log_index = message.log_index,
                    "no decodable bridge event in receipt"
                );
                return Vote::Skip(SkipReason::NoEvent);
            }
            Ok(Some(event)) => event,
        };

        if receipt.block_number != message.block_number {
            warn!(
                proposed = message.block_number,
                observed = receipt.block_number,
                "block number disagrees with receipt"
            );
            return Vote::No;
        }

        if decoded.matches(message) {
            Vote::Yes
        } else {
            warn!(
                record_id = message.record_id,
                tx_hash = %message.source_tx_hash,
                "decoded event disagrees with proposed message"
            );
            Vote::No
        }
    }
}

#[async_trait]
impl AdmissionApi for AdmissionService {
    async fn verify(&self, message: Option<&EventRecordMessage>) -> Vote {
        let Some(message) = message else {
            warn!("side handler invoked without a message");
            return Vote::Skip(SkipReason::UnknownRequest);
        };
        if let Err(err) = message.validate_basic() {
            warn!(%err, "message failed structural validation");
            return Vote::Skip(SkipReason::UnknownRequest);
        }

        debug!(
            record_id = message.record_id,
            kind = %message.source_chain_kind,
            tx_hash = %message.source_tx_hash,
            "verifying proposed event record"
        );

        match message.source_chain_kind {
            // Internally originated records carry no external receipt and
            // are trusted at their origin; they flow through commit for
            // de-duplication and indexing only.
            SourceChainKind::Stake => Vote::Yes,
            _ => self.verify_bridge_event(message).await,
        }
    }

    async fn commit(
        &self,
        message: Option<&EventRecordMessage>,
        outcome: VoteOutcome,
        block_time: u64,
    ) -> Result<RecordCommitted, AdmissionError> {
        let message = message.ok_or(AdmissionError::UnknownRequest("missing message"))?;
        message.validate_basic()?;

        if outcome != VoteOutcome::Yes {
            debug!(
                record_id = message.record_id,
                ?outcome,
                "rejected by aggregated vote, nothing committed"
            );
            return Err(AdmissionError::ValidationFailed(outcome));
        }

        let sequence = calculate_sequence(
            message.block_number,
            message.log_index,
            message.source_chain_kind,
        );

        // Single lock span: the replay check and every write happen as one
        // unit, and all fallible steps precede the first write.
        let mut store = self.store.lock();
        if store.has_sequence(&sequence) {
            warn!(%sequence, "replayed event, already committed");
            return Err(AdmissionError::ReplayedEvent { sequence });
        }

        let record = EventRecord::from_message(message, block_time);
        let local_id = cmp::max(store.latest_id().saturating_add(1), message.record_id);

        store.set_sequence(&sequence);
        store.put_record(record.clone());
        store.set_latest_id(local_id);
        store.set_local_id(message.source_chain_kind, message.record_id, local_id);

        info!(
            record_id = record.record_id,
            kind = %record.source_chain_kind,
            %sequence,
            local_id,
            "event record committed"
        );
        Ok(RecordCommitted::new(message, &record))
    }
}
