//! # Domain Errors
//!
//! Error types for event admission.

use super::value_objects::{Sequence, VoteOutcome};
use thiserror::Error;

/// Commit-side failure taxonomy.
///
/// Every variant is local to a single message; none is fatal to the node
/// or to other messages in the same batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdmissionError {
    /// Message absent or failed basic field validation.
    #[error("unknown request: {0}")]
    UnknownRequest(&'static str),

    /// Aggregated vote outcome was not Yes.
    #[error("side-tx validation failed: outcome was {0:?}")]
    ValidationFailed(VoteOutcome),

    /// Sequence already committed; the event was replayed.
    #[error("old transaction: sequence {sequence} already committed")]
    ReplayedEvent {
        /// The conflicting sequence key.
        sequence: Sequence,
    },
}

/// Transport-level failure from an external chain client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// RPC endpoint unreachable or request failed.
    #[error("network error: {0}")]
    Network(String),

    /// Endpoint responded with data the client could not interpret.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
