pub mod dns;
pub mod records;

pub use dns::{HandleDnsQueryUseCase, QUERY_LOG_TARGET};
pub use records::{ReloadOutcome, ReloadRecordTableUseCase};
