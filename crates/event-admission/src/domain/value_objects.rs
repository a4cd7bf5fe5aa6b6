//! # Domain Value Objects
//!
//! Immutable value types for cross-chain event admission.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source chain kinds with distinct receipt and addressing semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceChainKind {
    /// Ethereum mainnet.
    Eth,
    /// BNB Smart Chain.
    Bsc,
    /// Tron (receipt lookup by tx hash, Tron address encoding).
    Tron,
    /// Internally originated records, no external receipt.
    Stake,
}

impl SourceChainKind {
    /// Stable tag used as sequence key material.
    pub fn tag(&self) -> &'static str {
        match self {
            SourceChainKind::Eth => "eth",
            SourceChainKind::Bsc => "bsc",
            SourceChainKind::Tron => "tron",
            SourceChainKind::Stake => "stake",
        }
    }

    /// Whether an external receipt backs events of this kind.
    pub fn has_external_receipt(&self) -> bool {
        !matches!(self, SourceChainKind::Stake)
    }
}

impl fmt::Display for SourceChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Per-node vote on a proposed event record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vote {
    /// Re-derived evidence matches the message.
    Yes,
    /// Evidence was found and disagrees with the message.
    No,
    /// Cannot evaluate; expected to be retried by resubmission.
    Skip(SkipReason),
}

/// Why a verifier abstained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Message absent or failed structural validation.
    UnknownRequest,
    /// No bridge contract configured for the chain kind.
    Unconfigured,
    /// Receipt missing at the required confirmation depth.
    Unconfirmed,
    /// Receipt present but no decodable bridge event at the log index.
    NoEvent,
    /// External chain client exceeded the RPC bound.
    Timeout,
}

/// Aggregated block-level outcome, supplied by the consensus layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteOutcome {
    /// Majority agreed.
    Yes,
    /// Majority disagreed.
    No,
    /// Majority abstained.
    Skip,
}

/// Source chain transaction hash.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(Vec<u8>);

impl TxHash {
    /// Wrap raw hash bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// True when no hash bytes are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

/// Account identity of a proposal submitter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Vec<u8>);

impl AccountId {
    /// Wrap raw account bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// True when no account bytes are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

/// Contract address encoded per a specific chain's addressing scheme.
///
/// Addresses are never interchangeable across chain kinds: equality
/// includes the kind, so an Eth and a Tron address with identical bytes
/// still compare unequal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainAddress {
    /// Chain whose encoding applies.
    pub kind: SourceChainKind,
    /// Encoded address bytes.
    pub bytes: Vec<u8>,
}

impl ChainAddress {
    /// Create an address for a chain kind.
    pub fn new(kind: SourceChainKind, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
        }
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:0x{}", self.kind.tag(), hex::encode(&self.bytes))
    }
}

/// De-duplication key derived from source block position and chain kind.
///
/// Produced only by [`crate::algorithms::calculate_sequence`]; persisted as
/// an append-only set by the record store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence(String);

impl Sequence {
    pub(crate) fn from_key(key: String) -> Self {
        Self(key)
    }

    /// Rendered key, as persisted by the record store.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
