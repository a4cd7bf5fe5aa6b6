//! In-Memory Record Store Adapter
//!
//! Implements the `RecordStore` port over hash maps. The authoritative
//! store for tests; a persistent deployment swaps in a keyed database
//! behind the same trait.

use crate::domain::{EventRecord, Sequence, SourceChainKind};
use crate::ports::outbound::RecordStore;
use std::collections::{HashMap, HashSet};

/// Record store backed by process memory.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: HashMap<u64, EventRecord>,
    records_by_chain: HashMap<(SourceChainKind, u64), EventRecord>,
    sequences: HashSet<String>,
    local_ids: HashMap<(SourceChainKind, u64), u64>,
    latest_id: u64,
}

impl RecordStore for InMemoryRecordStore {
    fn record(&self, id: u64) -> Option<EventRecord> {
        self.records.get(&id).cloned()
    }

    fn record_by_chain(&self, id: u64, kind: SourceChainKind) -> Option<EventRecord> {
        self.records_by_chain.get(&(kind, id)).cloned()
    }

    fn has_sequence(&self, sequence: &Sequence) -> bool {
        self.sequences.contains(sequence.as_str())
    }

    fn set_sequence(&mut self, sequence: &Sequence) {
        self.sequences.insert(sequence.as_str().to_string());
    }

    fn latest_id(&self) -> u64 {
        self.latest_id
    }

    fn set_latest_id(&mut self, id: u64) {
        self.latest_id = id;
    }

    fn local_id_by_root(&self, kind: SourceChainKind, root_id: u64) -> Option<u64> {
        self.local_ids.get(&(kind, root_id)).copied()
    }

    fn set_local_id(&mut self, kind: SourceChainKind, root_id: u64, local_id: u64) {
        self.local_ids.insert((kind, root_id), local_id);
    }

    fn put_record(&mut self, record: EventRecord) {
        self.records.insert(record.record_id, record.clone());
        self.records_by_chain
            .insert((record.source_chain_kind, record.record_id), record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChainAddress;

    fn record(id: u64, kind: SourceChainKind) -> EventRecord {
        EventRecord {
            record_id: id,
            contract_address: ChainAddress::new(kind, [1u8; 20]),
            payload: vec![id as u8],
            source_chain_kind: kind,
            recorded_at: 1000,
        }
    }

    #[test]
    fn test_record_retrievable_by_both_keys() {
        let mut store = InMemoryRecordStore::default();
        store.put_record(record(7, SourceChainKind::Eth));

        assert!(store.record(7).is_some());
        assert!(store.record_by_chain(7, SourceChainKind::Eth).is_some());
        assert!(store.record_by_chain(7, SourceChainKind::Tron).is_none());
        assert!(store.record(8).is_none());
    }

    #[test]
    fn test_numeric_ids_independent_per_chain() {
        let mut store = InMemoryRecordStore::default();
        store.put_record(record(7, SourceChainKind::Eth));
        store.put_record(record(7, SourceChainKind::Bsc));

        let eth = store.record_by_chain(7, SourceChainKind::Eth).unwrap();
        let bsc = store.record_by_chain(7, SourceChainKind::Bsc).unwrap();
        assert_ne!(eth.source_chain_kind, bsc.source_chain_kind);
    }

    #[test]
    fn test_sequence_set_membership() {
        let mut store = InMemoryRecordStore::default();
        let seq = Sequence::from_key("eth/123".to_string());
        assert!(!store.has_sequence(&seq));
        store.set_sequence(&seq);
        assert!(store.has_sequence(&seq));
    }

    #[test]
    fn test_latest_id_roundtrip() {
        let mut store = InMemoryRecordStore::default();
        assert_eq!(store.latest_id(), 0);
        store.set_latest_id(42);
        assert_eq!(store.latest_id(), 42);
    }

    #[test]
    fn test_local_id_index() {
        let mut store = InMemoryRecordStore::default();
        store.set_local_id(SourceChainKind::Tron, 9, 100);
        assert_eq!(store.local_id_by_root(SourceChainKind::Tron, 9), Some(100));
        assert_eq!(store.local_id_by_root(SourceChainKind::Eth, 9), None);
    }
}
