use crate::ports::{RecordSource, RecordStore};
use microdns_domain::DomainError;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// A new table with this many entries is now live
    Loaded { entries: usize },
    /// The source does not exist; the store was left untouched
    SourceMissing,
}

/// Loads the record table from its source and publishes it to the store.
///
/// The store is only touched after a complete, successful parse, so a failed
/// load leaves the previous table serving.
pub struct ReloadRecordTableUseCase {
    source: Arc<dyn RecordSource>,
    store: Arc<dyn RecordStore>,
}

impl ReloadRecordTableUseCase {
    pub fn new(source: Arc<dyn RecordSource>, store: Arc<dyn RecordStore>) -> Self {
        Self { source, store }
    }

    pub async fn execute(&self) -> Result<ReloadOutcome, DomainError> {
        match self.source.load().await? {
            Some(table) => {
                let entries = table.len();
                self.store.replace(table);
                info!(
                    source = %self.source.location(),
                    entries,
                    "Record table loaded"
                );
                Ok(ReloadOutcome::Loaded { entries })
            }
            None => {
                warn!(
                    source = %self.source.location(),
                    "Record table not found"
                );
                Ok(ReloadOutcome::SourceMissing)
            }
        }
    }
}
