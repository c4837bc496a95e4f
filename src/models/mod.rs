//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod sale;

// Re-export commonly used models
pub use event::{Event, EventType, CreateEventRequest, UpdateEventRequest};
pub use sale::TicketSale;
