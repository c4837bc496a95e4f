//! Ticket sale model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// An immutable record of one purchase transaction against an event.
///
/// Sales are never updated or deleted by the ledger; they outlive their
/// event so the sale history stays intact as an audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketSale {
    pub id: i64,
    pub event_id: i64,
    pub num_tickets: i32,
    pub purchased_at: DateTime<Utc>,
}
