//! Test data helpers for building event fixtures
//!
//! This module provides builders for realistic create and update requests
//! so tests only spell out the fields they actually assert on.

use chrono::NaiveDate;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Words;
use fake::Fake;
use TicketLedger::models::{CreateEventRequest, Event, EventType, UpdateEventRequest};

/// Build a create request with realistic fields and the given inventory
pub fn event_with_stock(total_tickets: i32) -> CreateEventRequest {
    CreateEventRequest {
        name: Words(2..4).fake::<Vec<String>>().join(" "),
        date: NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
        time: "19:30".to_string(),
        venue_name: CompanyName().fake(),
        total_tickets,
        price: 25.0,
        event_type: EventType::Concert,
    }
}

/// Build a create request pinned to a specific date
pub fn event_on_date(date: NaiveDate, total_tickets: i32) -> CreateEventRequest {
    CreateEventRequest {
        date,
        ..event_with_stock(total_tickets)
    }
}

/// The five-ticket fundraiser used by the purchase walkthrough tests
pub fn five_ticket_fundraiser() -> CreateEventRequest {
    CreateEventRequest {
        name: "Charity Gala".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
        time: "18:00".to_string(),
        venue_name: "Grand Hall".to_string(),
        total_tickets: 5,
        price: 20.0,
        event_type: EventType::Fundraiser,
    }
}

/// Turn a stored event into an update request replaying its current fields
pub fn replacement_request(event: &Event) -> UpdateEventRequest {
    UpdateEventRequest {
        name: event.name.clone(),
        date: event.date,
        time: event.time.clone(),
        venue_name: event.venue_name.clone(),
        total_tickets: event.total_tickets,
        price: event.price,
        event_type: event.event_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_with_stock_sets_inventory() {
        let request = event_with_stock(7);
        assert_eq!(request.total_tickets, 7);
        assert!(!request.name.is_empty());
        assert!(!request.venue_name.is_empty());
    }

    #[test]
    fn test_event_on_date_pins_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let request = event_on_date(date, 3);
        assert_eq!(request.date, date);
        assert_eq!(request.total_tickets, 3);
    }

    #[test]
    fn test_five_ticket_fundraiser_fixture() {
        let request = five_ticket_fundraiser();
        assert_eq!(request.total_tickets, 5);
        assert_eq!(request.price, 20.0);
        assert_eq!(request.event_type, EventType::Fundraiser);
    }
}
