use arc_swap::ArcSwap;
use microdns_application::ports::RecordStore;
use microdns_domain::{HostAddresses, RecordTable};
use std::sync::Arc;

/// Record table snapshot that listeners read without locking.
///
/// Reloads build a complete new table and publish it with a single pointer
/// swap; in-flight lookups keep the snapshot they already loaded.
pub struct SwappableRecordStore {
    table: ArcSwap<RecordTable>,
}

impl SwappableRecordStore {
    pub fn new(table: RecordTable) -> Self {
        Self {
            table: ArcSwap::from_pointee(table),
        }
    }

    pub fn empty() -> Self {
        Self::new(RecordTable::new())
    }
}

impl Default for SwappableRecordStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl RecordStore for SwappableRecordStore {
    fn lookup(&self, domain: &str) -> Option<HostAddresses> {
        self.table.load().get(domain)
    }

    fn replace(&self, table: RecordTable) {
        self.table.store(Arc::new(table));
    }

    fn len(&self) -> usize {
        self.table.load().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_swaps_whole_table() {
        let store = SwappableRecordStore::new(
            RecordTable::parse("old.test 10.0.0.1 ::1\n").unwrap(),
        );
        let before = store.table.load_full();

        store.replace(RecordTable::parse("new.test 10.0.0.2 ::2\n").unwrap());

        assert!(store.lookup("old.test.").is_none());
        assert!(store.lookup("new.test.").is_some());
        // Earlier snapshots are unaffected by the swap.
        assert!(before.get("old.test.").is_some());
    }

    #[test]
    fn test_empty_store() {
        let store = SwappableRecordStore::default();
        assert!(store.is_empty());
        assert!(store.lookup("anything.").is_none());
    }
}
