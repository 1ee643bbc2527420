mod reload;

pub use reload::{ReloadOutcome, ReloadRecordTableUseCase};
