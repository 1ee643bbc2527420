use clap::Parser;
use microdns_application::ports::RecordStore;
use microdns_application::use_cases::{HandleDnsQueryUseCase, ReloadRecordTableUseCase};
use microdns_domain::config::responder::{
    DEFAULT_IPV4, DEFAULT_IPV6, DEFAULT_LISTEN, DEFAULT_RECORDS_PATH, DEFAULT_SHUTDOWN_GRACE_SECS,
    DEFAULT_TTL,
};
use microdns_domain::{AnswerPolicy, ConfigArgs, ResponderConfig};
use microdns_infrastructure::dns::DnsServerHandler;
use microdns_infrastructure::records::{FileRecordSource, SwappableRecordStore};
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod server;

use bootstrap::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "microdns")]
#[command(version)]
#[command(about = "microdns - authoritative DNS responder for a static A/AAAA table")]
struct Cli {
    /// IPv4 address for names missing from the record table
    #[arg(long, default_value = DEFAULT_IPV4)]
    ipv4: String,

    /// IPv6 address for names missing from the record table
    #[arg(long, default_value = DEFAULT_IPV6)]
    ipv6: String,

    /// Time to live of every answer, in seconds
    #[arg(long, default_value_t = DEFAULT_TTL)]
    ttl: u32,

    /// Listen address for both UDP and TCP (host:port or :port)
    #[arg(long, default_value = DEFAULT_LISTEN)]
    port: String,

    /// Log every query
    #[arg(
        long,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    log: bool,

    /// Record table file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_RECORDS_PATH)]
    conf: PathBuf,

    /// Records per reply: "matched" answers the queried type only, "both" always sends A and AAAA
    #[arg(long, default_value = "matched")]
    answer_policy: AnswerPolicy,

    /// Seconds allowed for draining listeners on shutdown
    #[arg(long, default_value_t = DEFAULT_SHUTDOWN_GRACE_SECS)]
    shutdown_grace: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Cli {
    fn config_args(&self) -> ConfigArgs {
        ConfigArgs {
            ipv4: self.ipv4.clone(),
            ipv6: self.ipv6.clone(),
            ttl: self.ttl,
            listen: self.port.clone(),
            log_queries: self.log,
            records_path: self.conf.clone(),
            answer_policy: self.answer_policy,
            shutdown_grace_secs: self.shutdown_grace,
        }
    }
}

/// Long flags that may also be written with a single dash, as in `-port :53` or `-log=true`.
const SINGLE_DASH_FLAGS: [&str; 10] = [
    "ipv4",
    "ipv6",
    "ttl",
    "port",
    "log",
    "conf",
    "answer-policy",
    "shutdown-grace",
    "log-level",
    "log-format",
];

/// Rewrites single-dash long flags to the `--name` form clap expects.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| match arg.to_str() {
            Some(flag) if index > 0 && is_single_dash_flag(flag) => {
                OsString::from(format!("-{}", flag))
            }
            _ => arg,
        })
        .collect()
}

fn is_single_dash_flag(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            SINGLE_DASH_FLAGS.contains(&name)
        }
        _ => false,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    bootstrap::init_logging(&cli.log_level, cli.log_format);

    info!("Starting microdns v{}", env!("CARGO_PKG_VERSION"));

    let config = Arc::new(ResponderConfig::from_args(cli.config_args())?);
    bootstrap::log_config(&config);

    // The table is fully loaded before any listener can read it.
    let store = Arc::new(SwappableRecordStore::empty());
    let store_port: Arc<dyn RecordStore> = store.clone();
    let reload = ReloadRecordTableUseCase::new(
        Arc::new(FileRecordSource::new(&config.records_path)),
        store_port.clone(),
    );
    bootstrap::load_initial_records(&reload).await?;

    let use_case = Arc::new(HandleDnsQueryUseCase::new(store_port, config.clone()));
    let handler = DnsServerHandler::new(use_case);

    let shutdown = CancellationToken::new();
    let mut listeners = server::start_dns_server(
        config.listen,
        handler,
        shutdown.clone(),
        config.shutdown_grace,
    )
    .await?;

    tokio::select! {
        signal = server::wait_for_shutdown(&reload) => {
            let signal = signal?;
            info!(signal = %signal, "Signal received, stopping");
        }
        e = listeners.first_exit() => {
            error!(error = %e, "DNS listener exited");
            shutdown.cancel();
            return Err(e);
        }
    }

    shutdown.cancel();
    listeners.join().await;

    info!("Server shutdown complete");
    Ok(())
}
