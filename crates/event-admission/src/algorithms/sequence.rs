//! # Sequence Function
//!
//! Deterministic de-duplication key for committed events.

use crate::domain::{Sequence, SourceChainKind};

/// Compute the replay-identity sequence for a source chain event.
///
/// Block number and log index occupy disjoint halves of a `u128`, so the
/// packing is injective over the full `u64` input space, and the chain tag
/// is part of the rendered key, so identical positions on different chains
/// never collide. Same inputs produce the same key on every node at any
/// time.
pub fn calculate_sequence(
    block_number: u64,
    log_index: u64,
    kind: SourceChainKind,
) -> Sequence {
    let packed = ((block_number as u128) << 64) | log_index as u128;
    Sequence::from_key(format!("{}/{}", kind.tag(), packed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_deterministic() {
        let a = calculate_sequence(599, 10, SourceChainKind::Eth);
        let b = calculate_sequence(599, 10, SourceChainKind::Eth);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sequence_discriminates_chain_kind() {
        let eth = calculate_sequence(599, 10, SourceChainKind::Eth);
        let bsc = calculate_sequence(599, 10, SourceChainKind::Bsc);
        let tron = calculate_sequence(599, 10, SourceChainKind::Tron);
        assert_ne!(eth, bsc);
        assert_ne!(eth, tron);
        assert_ne!(bsc, tron);
    }

    #[test]
    fn test_sequence_no_positional_overlap() {
        // (block=1, log=0) and (block=0, log=1) must not collide, which a
        // naive block*unit+log packing allows once log_index exceeds the
        // unit.
        let a = calculate_sequence(1, 0, SourceChainKind::Eth);
        let b = calculate_sequence(0, 1, SourceChainKind::Eth);
        assert_ne!(a, b);

        let c = calculate_sequence(1, u64::MAX, SourceChainKind::Eth);
        let d = calculate_sequence(2, 0, SourceChainKind::Eth);
        assert_ne!(c, d);
    }

    #[test]
    fn test_sequence_distinct_positions() {
        let base = calculate_sequence(599, 10, SourceChainKind::Eth);
        assert_ne!(base, calculate_sequence(599, 11, SourceChainKind::Eth));
        assert_ne!(base, calculate_sequence(600, 10, SourceChainKind::Eth));
    }

    #[test]
    fn test_sequence_key_carries_chain_tag() {
        let seq = calculate_sequence(599, 10, SourceChainKind::Tron);
        assert!(seq.as_str().starts_with("tron/"));
    }
}
