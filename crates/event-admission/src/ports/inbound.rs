//! # Inbound Ports
//!
//! API trait defining what the admission subsystem can do.

use crate::domain::{AdmissionError, EventRecordMessage, Vote, VoteOutcome};
use crate::events::RecordCommitted;
use async_trait::async_trait;

/// Event admission API - inbound port.
///
/// The verifier runs once per candidate message per validating node at
/// proposal time; the committer runs exactly once per message after the
/// aggregated outcome is known. The routing layer passes `None` when it
/// could not decode a message at all.
#[async_trait]
pub trait AdmissionApi: Send + Sync {
    /// Independently re-derive the truth of a proposed event and vote.
    ///
    /// Read-only; identical external chain state yields identical votes.
    async fn verify(&self, message: Option<&EventRecordMessage>) -> Vote;

    /// Apply the deterministic state transition for an aggregated outcome.
    ///
    /// All-or-nothing: on any error no sequence is marked, no record is
    /// stored, no counter moves, and no event is emitted.
    async fn commit(
        &self,
        message: Option<&EventRecordMessage>,
        outcome: VoteOutcome,
        block_time: u64,
    ) -> Result<RecordCommitted, AdmissionError>;
}
