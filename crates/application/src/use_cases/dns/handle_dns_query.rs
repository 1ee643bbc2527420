use crate::ports::RecordStore;
use microdns_domain::{
    AnswerPolicy, DnsAnswer, DnsRecord, DnsRequest, HostAddresses, ResponderConfig,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Target of the per-query lines; the binary keeps it enabled whatever the log level.
pub const QUERY_LOG_TARGET: &str = "microdns::query";

pub struct HandleDnsQueryUseCase {
    store: Arc<dyn RecordStore>,
    config: Arc<ResponderConfig>,
}

impl HandleDnsQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>, config: Arc<ResponderConfig>) -> Self {
        Self { store, config }
    }

    /// Answers a query from the record table, falling back to the configured defaults.
    pub fn execute(&self, request: &DnsRequest) -> DnsAnswer {
        if self.config.log_queries {
            info!(
                target: QUERY_LOG_TARGET,
                client = %request.client.ip(),
                domain = %request.domain,
                record_type = %request.record_type,
                "DNS query"
            );
        }

        let (addresses, from_table) = match self.store.lookup(&request.domain) {
            Some(addresses) => (addresses, true),
            None => (
                HostAddresses::new(self.config.default_ipv4, self.config.default_ipv6),
                false,
            ),
        };

        let ttl = self.config.ttl;
        let a = || DnsRecord::a(Arc::clone(&request.domain), addresses.ipv4, ttl);
        let aaaa = || DnsRecord::aaaa(Arc::clone(&request.domain), addresses.ipv6, ttl);

        let records = match self.config.answer_policy {
            AnswerPolicy::MatchQueryType if request.record_type.is_a() => vec![a()],
            AnswerPolicy::MatchQueryType => vec![aaaa()],
            AnswerPolicy::Both => vec![a(), aaaa()],
        };

        debug!(
            domain = %request.domain,
            from_table,
            answers = records.len(),
            "Answer built"
        );

        DnsAnswer::new(records, from_table)
    }
}
