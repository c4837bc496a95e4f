//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for applications embedding the ledger.

use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, LedgerError, Result};

/// Initialize logging based on configuration.
///
/// Returns the appender worker guard; the caller must keep it alive for
/// the process lifetime or buffered file output is lost on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, "ticketledger.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a ledger error at the level matching its severity.
pub fn log_ledger_error(context: &str, err: &LedgerError) {
    match err.severity() {
        ErrorSeverity::Critical | ErrorSeverity::Error => {
            error!(context = context, severity = %err.severity(), error = %err, "Ledger operation failed");
        }
        ErrorSeverity::Warning => {
            warn!(context = context, severity = %err.severity(), error = %err, "Ledger operation degraded");
        }
        ErrorSeverity::Info => {
            info!(context = context, severity = %err.severity(), error = %err, "Ledger operation refused input");
        }
    }
}
