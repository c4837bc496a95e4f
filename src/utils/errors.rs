//! Error handling for TicketLedger
//!
//! This module defines the main error type used throughout the library.
//! Only system failures are errors: expected business outcomes such as
//! "event not found" or "purchase rejected" are returned as typed values
//! by the ledger so callers cannot mistake a refusal for a fault.

use thiserror::Error;

/// Main error type for TicketLedger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for TicketLedger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

impl LedgerError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LedgerError::Database(_) => ErrorSeverity::Critical,
            LedgerError::Migration(_) => ErrorSeverity::Critical,
            LedgerError::Config(_) => ErrorSeverity::Critical,
            LedgerError::InvalidInput(_) => ErrorSeverity::Info,
        }
    }

    /// Message safe to show to end users: validation feedback is passed
    /// through, storage internals are not.
    pub fn user_message(&self) -> String {
        match self {
            LedgerError::InvalidInput(message) => message.clone(),
            LedgerError::Config(_) => "The service is not configured correctly.".to_string(),
            LedgerError::Database(_) | LedgerError::Migration(_) => {
                "The service could not complete the request. Please try again later.".to_string()
            }
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
