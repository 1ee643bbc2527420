use super::answer_policy::AnswerPolicy;
use super::errors::ConfigError;
use super::listen::parse_listen_addr;
use crate::record_table::parse_ipv6_or_mapped;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_IPV4: &str = "127.0.0.1";
pub const DEFAULT_IPV6: &str = "::1";
pub const DEFAULT_TTL: u32 = 86_400;
pub const DEFAULT_LISTEN: &str = ":8600";
pub const DEFAULT_RECORDS_PATH: &str = "/home/dns.conf";
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 5;

/// Raw values as they arrive from the command line.
#[derive(Debug, Clone)]
pub struct ConfigArgs {
    pub ipv4: String,
    pub ipv6: String,
    pub ttl: u32,
    pub listen: String,
    pub log_queries: bool,
    pub records_path: PathBuf,
    pub answer_policy: AnswerPolicy,
    pub shutdown_grace_secs: u64,
}

impl Default for ConfigArgs {
    fn default() -> Self {
        Self {
            ipv4: DEFAULT_IPV4.to_string(),
            ipv6: DEFAULT_IPV6.to_string(),
            ttl: DEFAULT_TTL,
            listen: DEFAULT_LISTEN.to_string(),
            log_queries: false,
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            answer_policy: AnswerPolicy::default(),
            shutdown_grace_secs: DEFAULT_SHUTDOWN_GRACE_SECS,
        }
    }
}

/// Responder settings, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderConfig {
    /// Answer for A queries on names missing from the record table
    pub default_ipv4: Ipv4Addr,

    /// Answer for AAAA queries on names missing from the record table
    pub default_ipv6: Ipv6Addr,

    /// TTL stamped on every emitted record
    pub ttl: u32,

    /// Address shared by the UDP and TCP listeners
    pub listen: SocketAddr,

    /// Emit one log line per query
    pub log_queries: bool,

    /// Record table file
    pub records_path: PathBuf,

    pub answer_policy: AnswerPolicy,

    /// Upper bound for draining listeners on shutdown
    pub shutdown_grace: Duration,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            default_ipv4: Ipv4Addr::LOCALHOST,
            default_ipv6: Ipv6Addr::LOCALHOST,
            ttl: DEFAULT_TTL,
            listen: SocketAddr::from((Ipv6Addr::UNSPECIFIED, 8600)),
            log_queries: false,
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            answer_policy: AnswerPolicy::default(),
            shutdown_grace: Duration::from_secs(DEFAULT_SHUTDOWN_GRACE_SECS),
        }
    }
}

impl ResponderConfig {
    /// Builds the configuration, rejecting address literals that do not parse.
    pub fn from_args(args: ConfigArgs) -> Result<Self, ConfigError> {
        let default_ipv4 = args
            .ipv4
            .trim()
            .parse::<Ipv4Addr>()
            .map_err(|_| ConfigError::InvalidAddress {
                family: "IPv4",
                value: args.ipv4.clone(),
            })?;

        let default_ipv6 =
            parse_ipv6_or_mapped(args.ipv6.trim()).ok_or_else(|| ConfigError::InvalidAddress {
                family: "IPv6",
                value: args.ipv6.clone(),
            })?;

        let config = Self {
            default_ipv4,
            default_ipv6,
            ttl: args.ttl,
            listen: parse_listen_addr(&args.listen)?,
            log_queries: args.log_queries,
            records_path: args.records_path,
            answer_policy: args.answer_policy,
            shutdown_grace: Duration::from_secs(args.shutdown_grace_secs),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.records_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "Record table path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
