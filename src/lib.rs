//! TicketLedger inventory service
//!
//! A standalone inventory ledger for event ticketing. This library provides
//! event lifecycle management, atomic ticket purchases against remaining
//! stock, sale history for auditing, and a destructive store reset, all
//! backed by PostgreSQL.

#![allow(non_snake_case)]

pub mod config;
pub mod services;
pub mod models;
pub mod database;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LedgerError, Result};

// Re-export main components for easy access
pub use database::{DatabasePool, create_pool, run_migrations};
pub use models::{Event, EventType, CreateEventRequest, UpdateEventRequest, TicketSale};
pub use services::{InventoryLedger, PurchaseOutcome, PurchaseRejection};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
