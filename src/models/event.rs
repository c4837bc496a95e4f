//! Event model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// A ticketed occasion with remaining inventory and a unit price.
///
/// `total_tickets` is the remaining sellable inventory, never negative.
/// Only the purchase path decrements it; updates replace it outright.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    /// Free-form wall-clock string, not validated.
    pub time: String,
    pub venue_name: String,
    pub total_tickets: i32,
    pub price: f64,
    pub event_type: EventType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Closed set of event categories, stored as the Postgres `event_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Concert,
    Fundraiser,
    SocialEvent,
    Other,
}

impl EventType {
    /// Canonical label, matching the database enum spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Concert => "concert",
            EventType::Fundraiser => "fundraiser",
            EventType::SocialEvent => "social_event",
            EventType::Other => "other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concert" => Ok(EventType::Concert),
            "fundraiser" => Ok(EventType::Fundraiser),
            "social_event" => Ok(EventType::SocialEvent),
            "other" => Ok(EventType::Other),
            _ => Err(format!("unknown event type: {s}")),
        }
    }
}

/// Payload for creating an event. The id and timestamps are store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub venue_name: String,
    pub total_tickets: i32,
    pub price: f64,
    pub event_type: EventType,
}

/// Payload for updating an event.
///
/// Updates are full-record replaces: every field is overwritten, including
/// `total_tickets`, with no reconciliation against tickets already sold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub venue_name: String,
    pub total_tickets: i32,
    pub price: f64,
    pub event_type: EventType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels_round_trip() {
        let all = [
            EventType::Concert,
            EventType::Fundraiser,
            EventType::SocialEvent,
            EventType::Other,
        ];
        for event_type in all {
            let parsed: EventType = event_type.as_str().parse().expect("label should parse");
            assert_eq!(parsed, event_type);
        }
    }

    #[test]
    fn test_event_type_rejects_unknown_label() {
        assert!("rave".parse::<EventType>().is_err());
    }

    #[test]
    fn test_event_type_serde_uses_snake_case() {
        let json = serde_json::to_string(&EventType::SocialEvent).expect("serialize");
        assert_eq!(json, "\"social_event\"");

        let parsed: EventType = serde_json::from_str("\"fundraiser\"").expect("deserialize");
        assert_eq!(parsed, EventType::Fundraiser);
    }
}
