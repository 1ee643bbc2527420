use std::fmt;

/// Query types as far as the responder cares about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    /// Any other query type, carried by its numeric code for logging
    Other(u16),
}

impl RecordType {
    pub fn is_a(&self) -> bool {
        matches!(self, RecordType::A)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::AAAA => f.write_str("AAAA"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}
