//! REST API module for HTTP endpoints
//!
//! - `POST /users/register` - Create an account
//! - `POST /users/login` - Exchange credentials for a token
//! - `GET /events` - List events
//! - `POST /events` - Create an event (organizers)
//! - `GET /events/:id` - Get a single event
//! - `PUT /events/:id` - Update an event (its organizer)
//! - `DELETE /events/:id` - Delete an event (its organizer)
//! - `POST /events/:id/register` - Register the caller as an attendee

pub mod events;
pub mod users;

use serde::Serialize;

use crate::types::Event;

/// Response carrying a message and an event
#[derive(Debug, Serialize)]
pub struct EventMessage {
    pub message: String,
    pub event: Event,
}

/// Response carrying a message and an event id
#[derive(Debug, Serialize)]
pub struct EventIdMessage {
    pub message: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
}
