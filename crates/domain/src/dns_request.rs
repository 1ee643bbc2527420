use super::RecordType;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsRequest {
    /// Queried name exactly as it appeared on the wire
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub client: SocketAddr,
}

impl DnsRequest {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType, client: SocketAddr) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            client,
        }
    }
}
