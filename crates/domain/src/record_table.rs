//! Static name → address table loaded from a line-oriented file.
//!
//! ```text
//! # comment
//! example.com   10.0.0.1   fd00::1
//! ```
//!
//! Only lines with exactly three whitespace-separated fields are records.
//! Everything else that is not a comment is skipped.

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use thiserror::Error;
use tracing::debug;

const COMMENT_PREFIX: char = '#';
const RECORD_FIELDS: usize = 3;

#[derive(Error, Debug)]
pub enum RecordTableError {
    #[error("Failed to read record table {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid {family} address '{value}' on line {line}")]
    InvalidAddress {
        line: usize,
        family: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostAddresses {
    pub ipv4: Ipv4Addr,
    pub ipv6: Ipv6Addr,
}

impl HostAddresses {
    pub fn new(ipv4: Ipv4Addr, ipv6: Ipv6Addr) -> Self {
        Self { ipv4, ipv6 }
    }
}

/// Returns `name` in fully-qualified form, appending the root dot if missing.
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Table key for `name`: fully qualified and ASCII-lowercased.
fn table_key(name: &str) -> String {
    let mut key = to_fqdn(name);
    key.make_ascii_lowercase();
    key
}

/// Parses an address for the IPv6 column.
///
/// A dotted IPv4 literal is accepted and served as its IPv4-mapped form.
pub fn parse_ipv6_or_mapped(value: &str) -> Option<Ipv6Addr> {
    value
        .parse::<Ipv6Addr>()
        .ok()
        .or_else(|| value.parse::<Ipv4Addr>().ok().map(|v4| v4.to_ipv6_mapped()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    entries: HashMap<String, HostAddresses>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the whole file contents.
    ///
    /// Fails on the first accepted line whose addresses do not parse.
    pub fn parse(contents: &str) -> Result<Self, RecordTableError> {
        let mut table = Self::new();

        for (index, line) in contents.lines().enumerate() {
            let line_no = index + 1;
            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            debug!(line = line_no, fields = ?fields, "Record table line");

            if fields.len() != RECORD_FIELDS {
                if !fields.is_empty() {
                    debug!(
                        line = line_no,
                        field_count = fields.len(),
                        "Skipping record table line without exactly 3 fields"
                    );
                }
                continue;
            }

            let ipv4 = fields[1]
                .parse::<Ipv4Addr>()
                .map_err(|_| RecordTableError::InvalidAddress {
                    line: line_no,
                    family: "IPv4",
                    value: fields[1].to_string(),
                })?;
            let ipv6 =
                parse_ipv6_or_mapped(fields[2]).ok_or_else(|| RecordTableError::InvalidAddress {
                    line: line_no,
                    family: "IPv6",
                    value: fields[2].to_string(),
                })?;

            table.insert(fields[0], HostAddresses::new(ipv4, ipv6));
        }

        Ok(table)
    }

    pub fn insert(&mut self, domain: &str, addresses: HostAddresses) {
        self.entries.insert(table_key(domain), addresses);
    }

    /// Case-insensitive lookup on the fully-qualified name.
    pub fn get(&self, domain: &str) -> Option<HostAddresses> {
        self.entries.get(&table_key(domain)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
