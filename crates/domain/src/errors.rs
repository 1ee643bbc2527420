use crate::config::ConfigError;
use crate::record_table::RecordTableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    RecordTable(#[from] RecordTableError),
}
