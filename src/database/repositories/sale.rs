//! Ticket sale repository implementation

use sqlx::{PgPool, Postgres, Transaction};
use chrono::Utc;
use crate::models::sale::TicketSale;
use crate::utils::errors::LedgerError;

#[derive(Clone)]
pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a completed sale inside an open purchase transaction
    pub async fn record(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event_id: i64,
        num_tickets: i32,
    ) -> Result<TicketSale, LedgerError> {
        let sale = sqlx::query_as::<_, TicketSale>(
            r#"
            INSERT INTO ticket_sales (event_id, num_tickets, purchased_at)
            VALUES ($1, $2, $3)
            RETURNING id, event_id, num_tickets, purchased_at
            "#
        )
        .bind(event_id)
        .bind(num_tickets)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await?;

        Ok(sale)
    }

    /// List sales recorded against an event, oldest first
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<TicketSale>, LedgerError> {
        let sales = sqlx::query_as::<_, TicketSale>(
            "SELECT id, event_id, num_tickets, purchased_at FROM ticket_sales WHERE event_id = $1 ORDER BY id ASC"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Sum of tickets ever sold for an event
    pub async fn tickets_sold(&self, event_id: i64) -> Result<i64, LedgerError> {
        let total: (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(num_tickets), 0) FROM ticket_sales WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total.0)
    }

    /// Count total sale records
    pub async fn count(&self) -> Result<i64, LedgerError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ticket_sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
