use microdns_domain::{HostAddresses, RecordTable};

/// Read-mostly holder of the current record table.
///
/// Lookups run concurrently from every listener; `replace` publishes a whole
/// new table at once so readers never observe a half-built one.
pub trait RecordStore: Send + Sync {
    fn lookup(&self, domain: &str) -> Option<HostAddresses>;

    fn replace(&self, table: RecordTable);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
