mod record_source;
mod record_store;

pub use record_source::RecordSource;
pub use record_store::RecordStore;
