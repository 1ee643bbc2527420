use super::config::CONFIG_LOG_TARGET;
use clap::ValueEnum;
use microdns_application::use_cases::QUERY_LOG_TARGET;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Targets printed at any log level: the startup configuration and `--log` query lines.
const ALWAYS_ON_TARGETS: [&str; 2] = [CONFIG_LOG_TARGET, QUERY_LOG_TARGET];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// `RUST_LOG` takes precedence over the `--log-level` flag.
pub fn init_logging(level: &str, format: LogFormat) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level, rust_log.as_deref()))
        .with_target(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn build_filter(level: &str, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level));

    ALWAYS_ON_TARGETS.iter().fold(filter, |filter, target| {
        match format!("{}=info", target).parse::<Directive>() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    })
}
