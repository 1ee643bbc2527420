//! microdns domain layer
pub mod config;
pub mod dns_answer;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod record_table;

pub use config::{AnswerPolicy, ConfigArgs, ConfigError, ResponderConfig};
pub use dns_answer::DnsAnswer;
pub use dns_record::{DnsRecord, RecordType};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use record_table::{parse_ipv6_or_mapped, to_fqdn, HostAddresses, RecordTable, RecordTableError};
