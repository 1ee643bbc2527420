use super::RecordType;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// A single address record destined for the answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub address: IpAddr,
    pub ttl: u32,
}

impl DnsRecord {
    pub fn a(domain: Arc<str>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            domain,
            record_type: RecordType::A,
            address: IpAddr::V4(address),
            ttl,
        }
    }

    pub fn aaaa(domain: Arc<str>, address: Ipv6Addr, ttl: u32) -> Self {
        Self {
            domain,
            record_type: RecordType::AAAA,
            address: IpAddr::V6(address),
            ttl,
        }
    }
}
