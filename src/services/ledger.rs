//! Inventory ledger service implementation
//!
//! This service owns the ticket inventory: event lifecycle, availability
//! queries, atomic ticket purchases and the destructive store reset.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn, debug};
use crate::database::connection::{DatabasePool, MIGRATOR};
use crate::database::repositories::{EventRepository, SaleRepository};
use crate::models::{Event, CreateEventRequest, UpdateEventRequest, TicketSale};
use crate::utils::errors::{LedgerError, Result};

/// Outcome of a purchase attempt
///
/// A refused purchase is a normal business result, not an error. Callers
/// render the rejection to the end user and move on.
#[derive(Debug, Clone, Serialize)]
pub enum PurchaseOutcome {
    /// Inventory was decremented and the sale recorded.
    Completed(TicketSale),
    /// Nothing changed; the rejection says why.
    Rejected(PurchaseRejection),
}

/// Why a purchase was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PurchaseRejection {
    /// No event exists with the requested id.
    EventNotFound { event_id: i64 },
    /// Remaining stock cannot cover the requested quantity.
    InsufficientTickets { available: i32, requested: i32 },
}

impl std::fmt::Display for PurchaseRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseRejection::EventNotFound { event_id } => {
                write!(f, "Event {} does not exist", event_id)
            }
            PurchaseRejection::InsufficientTickets { available, requested } => {
                write!(f, "Only {} tickets left, cannot sell {}", available, requested)
            }
        }
    }
}

/// Inventory ledger service for managing events and ticket sales
#[derive(Clone)]
pub struct InventoryLedger {
    pool: DatabasePool,
    event_repository: EventRepository,
    sale_repository: SaleRepository,
}

impl InventoryLedger {
    /// Create a new InventoryLedger instance
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            event_repository: EventRepository::new(pool.clone()),
            sale_repository: SaleRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new event
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        debug!(name = %request.name, total_tickets = request.total_tickets, "Creating event");

        if request.total_tickets < 0 {
            warn!(total_tickets = request.total_tickets, "Rejecting event with negative inventory");
            return Err(LedgerError::InvalidInput(format!(
                "total_tickets must be non-negative, got {}",
                request.total_tickets
            )));
        }

        let event = self.event_repository.create(request).await?;
        info!(event_id = event.id, total_tickets = event.total_tickets, "Event created successfully");

        Ok(event)
    }

    /// Replace every field of an existing event
    ///
    /// Inventory is overwritten as-is, with no reconciliation against sales
    /// already recorded; treat it as an administrative correction. Returns
    /// `Ok(None)` when no event has the given id.
    pub async fn update_event(&self, event_id: i64, request: UpdateEventRequest) -> Result<Option<Event>> {
        debug!(event_id = event_id, "Updating event");

        if request.total_tickets < 0 {
            warn!(event_id = event_id, total_tickets = request.total_tickets, "Rejecting update with negative inventory");
            return Err(LedgerError::InvalidInput(format!(
                "total_tickets must be non-negative, got {}",
                request.total_tickets
            )));
        }

        let event = self.event_repository.update(event_id, request).await?;
        match &event {
            Some(updated) => info!(event_id = updated.id, total_tickets = updated.total_tickets, "Event updated successfully"),
            None => debug!(event_id = event_id, "No event to update"),
        }

        Ok(event)
    }

    /// Delete an event; deleting a missing id is a no-op
    ///
    /// Sales recorded against the event are kept as an audit trail.
    pub async fn delete_event(&self, event_id: i64) -> Result<()> {
        debug!(event_id = event_id, "Deleting event");

        let deleted = self.event_repository.delete(event_id).await?;
        if deleted {
            info!(event_id = event_id, "Event deleted");
        } else {
            debug!(event_id = event_id, "No event to delete");
        }

        Ok(())
    }

    /// Get event by ID
    pub async fn get_event(&self, event_id: i64) -> Result<Option<Event>> {
        debug!(event_id = event_id, "Getting event by ID");
        self.event_repository.find_by_id(event_id).await
    }

    /// List all events in insertion order
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        debug!("Listing all events");
        self.event_repository.list().await
    }

    /// List events that still have tickets on sale
    pub async fn list_available_events(&self) -> Result<Vec<Event>> {
        debug!("Listing available events");
        self.event_repository.list_available().await
    }

    /// List events held on a given date
    pub async fn list_events_on_date(&self, date: NaiveDate) -> Result<Vec<Event>> {
        debug!(date = %date, "Listing events on date");
        self.event_repository.list_on_date(date).await
    }

    /// Purchase tickets against an event's remaining inventory
    ///
    /// The inventory decrement and the sale record commit in one
    /// transaction: either both are visible afterwards or neither is. A
    /// request for more tickets than remain is rejected, even when some
    /// stock is left.
    pub async fn purchase(&self, event_id: i64, num_tickets: i32) -> Result<PurchaseOutcome> {
        debug!(event_id = event_id, num_tickets = num_tickets, "Attempting ticket purchase");

        if num_tickets < 1 {
            warn!(event_id = event_id, num_tickets = num_tickets, "Rejecting purchase with non-positive quantity");
            return Err(LedgerError::InvalidInput(format!(
                "num_tickets must be at least 1, got {}",
                num_tickets
            )));
        }

        let mut tx = self.pool.begin().await?;

        match self.event_repository.decrement_tickets(&mut tx, event_id, num_tickets).await? {
            Some(remaining) => {
                let sale = self.sale_repository.record(&mut tx, event_id, num_tickets).await?;
                tx.commit().await?;

                info!(
                    event_id = event_id,
                    sale_id = sale.id,
                    num_tickets = num_tickets,
                    remaining = remaining,
                    "Purchase completed"
                );
                Ok(PurchaseOutcome::Completed(sale))
            }
            None => {
                // The guard refused: the event is gone or its stock is too
                // low. Re-read inside the same transaction to tell them apart.
                let rejection = match self.event_repository.tickets_available(&mut tx, event_id).await? {
                    Some(available) => PurchaseRejection::InsufficientTickets {
                        available,
                        requested: num_tickets,
                    },
                    None => PurchaseRejection::EventNotFound { event_id },
                };
                tx.rollback().await?;

                warn!(event_id = event_id, num_tickets = num_tickets, reason = %rejection, "Purchase rejected");
                Ok(PurchaseOutcome::Rejected(rejection))
            }
        }
    }

    /// List sales recorded against an event
    pub async fn sales_for_event(&self, event_id: i64) -> Result<Vec<TicketSale>> {
        debug!(event_id = event_id, "Listing sales for event");
        self.sale_repository.list_for_event(event_id).await
    }

    /// Sum of tickets ever sold for an event
    pub async fn tickets_sold(&self, event_id: i64) -> Result<i64> {
        debug!(event_id = event_id, "Summing tickets sold for event");
        self.sale_repository.tickets_sold(event_id).await
    }

    /// Drop and recreate the entire store
    ///
    /// Destructive, intended for development and testing. Every event and
    /// sale is erased; migrations run again so the store is immediately
    /// usable.
    pub async fn reset_all(&self) -> Result<()> {
        warn!("Resetting ticket store: dropping all events and sales");

        let mut tx = self.pool.begin().await?;
        sqlx::query("DROP TABLE IF EXISTS ticket_sales")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DROP TABLE IF EXISTS events")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DROP TYPE IF EXISTS event_type")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        MIGRATOR.run(&self.pool).await?;

        info!("Ticket store reset completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let not_found = PurchaseRejection::EventNotFound { event_id: 42 };
        assert_eq!(not_found.to_string(), "Event 42 does not exist");

        let insufficient = PurchaseRejection::InsufficientTickets { available: 2, requested: 3 };
        assert_eq!(insufficient.to_string(), "Only 2 tickets left, cannot sell 3");
    }

    #[test]
    fn test_rejections_are_comparable() {
        let a = PurchaseRejection::InsufficientTickets { available: 0, requested: 1 };
        let b = PurchaseRejection::InsufficientTickets { available: 0, requested: 1 };
        assert_eq!(a, b);
        assert_ne!(a, PurchaseRejection::EventNotFound { event_id: 1 });
    }
}
