mod config;
mod logging;
mod records;

pub use config::log_config;
pub use logging::{init_logging, LogFormat};
pub use records::load_initial_records;
