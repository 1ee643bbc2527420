use async_trait::async_trait;
use microdns_application::ports::RecordSource;
use microdns_domain::{DomainError, RecordTable, RecordTableError};
use std::path::PathBuf;
use tracing::debug;

/// Record table backed by a plain text file on disk.
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_error(&self, e: std::io::Error) -> DomainError {
        RecordTableError::Read {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn load(&self) -> Result<Option<RecordTable>, DomainError> {
        if !tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| self.read_error(e))?
        {
            return Ok(None);
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.read_error(e))?;
        let contents = String::from_utf8_lossy(&bytes);

        debug!(path = %self.path.display(), bytes = bytes.len(), "Parsing record table");
        let table = RecordTable::parse(&contents)?;
        Ok(Some(table))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
