mod handle_dns_query;

pub use handle_dns_query::{HandleDnsQueryUseCase, QUERY_LOG_TARGET};
