//! Integration tests for the destructive store reset
//!
//! reset_all drops the whole schema and provisions it again, so these tests
//! verify both the erasure and that the store comes back usable.

mod helpers;

use serial_test::serial;
use helpers::{TestDatabase, event_with_stock};

#[tokio::test]
#[serial]
async fn test_reset_all_erases_events_and_sales() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let ledger = db.ledger();

    let event = ledger.create_event(event_with_stock(10)).await.expect("Failed to create event");
    ledger.create_event(event_with_stock(4)).await.expect("Failed to create event");
    ledger.purchase(event.id, 2).await.expect("Failed to purchase");

    ledger.reset_all().await.expect("Failed to reset store");

    let events = ledger.list_events().await.expect("Failed to list events");
    assert!(events.is_empty());
    assert_eq!(db.count_records("events").await.expect("Failed to count events"), 0);
    assert_eq!(db.count_records("ticket_sales").await.expect("Failed to count sales"), 0);
}

#[tokio::test]
#[serial]
async fn test_reset_all_leaves_store_usable() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let ledger = db.ledger();

    ledger.create_event(event_with_stock(10)).await.expect("Failed to create event");
    ledger.reset_all().await.expect("Failed to reset store");

    // The schema is back: ids restart and the whole flow works again
    let recreated = ledger.create_event(event_with_stock(6)).await.expect("Failed to create event");
    assert_eq!(recreated.id, 1);

    let outcome = ledger.purchase(recreated.id, 6).await.expect("Failed to purchase");
    assert!(matches!(outcome, TicketLedger::services::PurchaseOutcome::Completed(_)));

    let available = ledger.list_available_events().await.expect("Failed to list available events");
    assert!(available.is_empty());
}

#[tokio::test]
#[serial]
async fn test_reset_all_is_repeatable() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let ledger = db.ledger();

    ledger.reset_all().await.expect("First reset failed");
    ledger.reset_all().await.expect("Second reset failed");

    let events = ledger.list_events().await.expect("Failed to list events");
    assert!(events.is_empty());
}
