pub mod file_source;
pub mod swappable_store;

pub use file_source::FileRecordSource;
pub use swappable_store::SwappableRecordStore;
