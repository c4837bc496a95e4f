//! Test helpers module
//!
//! This module provides utilities and helpers for testing the TicketLedger
//! library: disposable PostgreSQL stores and event fixture builders.

pub mod database_helper;
pub mod test_data;

pub use database_helper::*;
pub use test_data::*;
