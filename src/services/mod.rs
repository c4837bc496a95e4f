//! Services module
//!
//! This module contains business logic services

pub mod ledger;

// Re-export commonly used services
pub use ledger::{InventoryLedger, PurchaseOutcome, PurchaseRejection};
