use microdns_domain::ResponderConfig;
use tracing::info;

/// Target of the startup configuration dump, always enabled by the log filter.
pub const CONFIG_LOG_TARGET: &str = "microdns::config";

pub fn log_config(config: &ResponderConfig) {
    info!(target: CONFIG_LOG_TARGET, "Configuration:");
    info!(target: CONFIG_LOG_TARGET, "  ipv4:   {}", config.default_ipv4);
    info!(target: CONFIG_LOG_TARGET, "  ipv6:   {}", config.default_ipv6);
    info!(target: CONFIG_LOG_TARGET, "  ttl:    {}", config.ttl);
    info!(target: CONFIG_LOG_TARGET, "  log:    {}", config.log_queries);
    info!(target: CONFIG_LOG_TARGET, "  port:   {}", config.listen);
    info!(target: CONFIG_LOG_TARGET, "  conf:   {}", config.records_path.display());
    info!(target: CONFIG_LOG_TARGET, "  policy: {}", config.answer_policy);
}
