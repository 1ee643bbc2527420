mod mock_records;

pub use mock_records::*;
