use microdns_application::use_cases::{ReloadOutcome, ReloadRecordTableUseCase};
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    Quit,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("SIGINT"),
            ShutdownSignal::Terminate => f.write_str("SIGTERM"),
            ShutdownSignal::Quit => f.write_str("SIGQUIT"),
        }
    }
}

/// Blocks until a termination signal arrives. SIGHUP reloads the record table
/// and keeps waiting.
#[cfg(unix)]
pub async fn wait_for_shutdown(reload: &ReloadRecordTableUseCase) -> anyhow::Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut quit = signal(SignalKind::quit())?;
    let mut hangup = signal(SignalKind::hangup())?;

    loop {
        tokio::select! {
            _ = interrupt.recv() => return Ok(ShutdownSignal::Interrupt),
            _ = terminate.recv() => return Ok(ShutdownSignal::Terminate),
            _ = quit.recv() => return Ok(ShutdownSignal::Quit),
            _ = hangup.recv() => {
                info!("SIGHUP received, reloading record table");
                reload_records(reload).await;
            }
        }
    }
}

#[cfg(not(unix))]
pub async fn wait_for_shutdown(_reload: &ReloadRecordTableUseCase) -> anyhow::Result<ShutdownSignal> {
    tokio::signal::ctrl_c().await?;
    Ok(ShutdownSignal::Interrupt)
}

/// Swaps in a freshly loaded table. Any failure keeps the current one serving.
pub async fn reload_records(reload: &ReloadRecordTableUseCase) {
    match reload.execute().await {
        Ok(ReloadOutcome::Loaded { entries }) => {
            info!(entries, "Record table reloaded");
        }
        Ok(ReloadOutcome::SourceMissing) => {
            warn!("Record table file is gone, keeping the current table");
        }
        Err(e) => {
            warn!(error = %e, "Record table reload failed, keeping the current table");
        }
    }
}
