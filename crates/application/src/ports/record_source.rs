use async_trait::async_trait;
use microdns_domain::{DomainError, RecordTable};

/// Where the static record table comes from.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Reads and parses the table.
    ///
    /// Returns `Ok(None)` when the source does not exist at all.
    async fn load(&self) -> Result<Option<RecordTable>, DomainError>;

    /// Human-readable location, used in log lines.
    fn location(&self) -> String;
}
