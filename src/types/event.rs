//! Event types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event record as held by the event store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub name: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "organizerId")]
    pub organizer_id: String,
    /// User ids of registered attendees, in registration order, no duplicates
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl Event {
    /// Create a new event with a generated id and no attendees
    pub fn new(name: String, description: String, organizer_id: String, date: String) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            name,
            description,
            date,
            organizer_id,
            attendees: Vec::new(),
        }
    }

    /// Check whether a user is already registered
    pub fn has_attendee(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|a| a == user_id)
    }

    /// Public listing projection (no attendee details)
    pub fn summary(&self) -> EventSummary {
        EventSummary {
            event_id: self.event_id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            organizer_id: self.organizer_id.clone(),
            date: self.date.clone(),
        }
    }

    /// Merge the supplied fields, leaving organizer and attendees untouched
    pub fn apply(&mut self, update: EventUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
    }
}

/// Event listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "organizerId")]
    pub organizer_id: String,
    pub date: String,
}

/// Validated input for a new event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub date: String,
}

/// Partial event update; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}
