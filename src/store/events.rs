//! Event store: events keyed by id with insertion order preserved

use std::collections::HashMap;

use parking_lot::RwLock;

use super::{StoreError, StoreResult};
use crate::types::{Event, EventSummary, EventUpdate};

#[derive(Default)]
struct EventTables {
    by_id: HashMap<String, Event>,
    order: Vec<String>,
}

/// Thread-safe event store
#[derive(Default)]
pub struct EventStore {
    tables: RwLock<EventTables>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an event owned by `organizer_id` and return the stored record
    pub fn create(
        &self,
        name: String,
        description: String,
        organizer_id: String,
        date: String,
    ) -> Event {
        let event = Event::new(name, description, organizer_id, date);
        let mut tables = self.tables.write();
        tables.order.push(event.event_id.clone());
        tables.by_id.insert(event.event_id.clone(), event.clone());
        event
    }

    /// All events in insertion order, without attendee details
    pub fn list(&self) -> Vec<EventSummary> {
        let tables = self.tables.read();
        tables
            .order
            .iter()
            .filter_map(|id| tables.by_id.get(id))
            .map(Event::summary)
            .collect()
    }

    pub fn get_by_id(&self, event_id: &str) -> Option<Event> {
        self.tables.read().by_id.get(event_id).cloned()
    }

    /// Merge supplied fields into an existing event
    pub fn update(&self, event_id: &str, update: EventUpdate) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let event = tables
            .by_id
            .get_mut(event_id)
            .ok_or(StoreError::NotFound("Event"))?;
        event.apply(update);
        Ok(())
    }

    /// Remove an event, returning the removed record
    pub fn delete(&self, event_id: &str) -> StoreResult<Event> {
        let mut tables = self.tables.write();
        let event = tables
            .by_id
            .remove(event_id)
            .ok_or(StoreError::NotFound("Event"))?;
        tables.order.retain(|id| id != event_id);
        Ok(event)
    }

    /// Add a user to an event's attendees, returning the updated record
    pub fn register_attendee(&self, event_id: &str, user_id: &str) -> StoreResult<Event> {
        let mut tables = self.tables.write();
        let event = tables
            .by_id
            .get_mut(event_id)
            .ok_or(StoreError::NotFound("Event"))?;

        if event.has_attendee(user_id) {
            return Err(StoreError::AlreadyRegistered);
        }

        event.attendees.push(user_id.to_string());
        Ok(event.clone())
    }

    pub fn len(&self) -> usize {
        self.tables.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
