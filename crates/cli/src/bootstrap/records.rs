use microdns_application::use_cases::{ReloadOutcome, ReloadRecordTableUseCase};
use microdns_domain::{DomainError, RecordTableError};
use tracing::{error, info};

/// First load of the record table.
///
/// A missing or unreadable file leaves the table empty and every query is
/// answered with the defaults. An address that does not parse stops startup.
pub async fn load_initial_records(reload: &ReloadRecordTableUseCase) -> anyhow::Result<()> {
    match reload.execute().await {
        Ok(ReloadOutcome::Loaded { .. }) => Ok(()),
        Ok(ReloadOutcome::SourceMissing) => {
            info!("Answering every query with the default addresses");
            Ok(())
        }
        Err(DomainError::RecordTable(e @ RecordTableError::Read { .. })) => {
            error!(error = %e, "Continuing with an empty record table");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
