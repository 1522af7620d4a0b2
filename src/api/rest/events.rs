//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::{EventIdMessage, EventMessage};
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::auth::{require_ownership, AuthUser, Organizer};
use crate::notify::{registration_email, spawn_notification};
use crate::store::StoreError;
use crate::types::{Event, EventRequest, EventSummary};
use crate::validation::{validate_event_update, validate_new_event};

/// GET /events - List all events
pub async fn list_events(
    _user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<EventSummary>> {
    Json(state.events.list())
}

/// POST /events - Create an event owned by the caller
pub async fn create_event(
    Organizer(claims): Organizer,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let Json(req) = payload?;
    let new_event = validate_new_event(&req)?;

    let event = state.events.create(
        new_event.name,
        new_event.description,
        claims.user_id,
        new_event.date,
    );

    info!(event_id = %event.event_id, organizer_id = %event.organizer_id, "Event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events/:id - Get a single event
pub async fn get_event(
    _user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    state
        .events
        .get_by_id(&event_id)
        .map(Json)
        .ok_or_else(|| StoreError::NotFound("Event").into())
}

/// PUT /events/:id - Update an event (organizer who created it)
pub async fn update_event(
    Organizer(claims): Organizer,
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<EventIdMessage>, ApiError> {
    require_ownership(&state.events, &event_id, &claims)?;

    let Json(req) = payload?;
    let update = validate_event_update(&req)?;
    state.events.update(&event_id, update)?;

    info!(%event_id, "Event updated");
    Ok(Json(EventIdMessage {
        message: "Event updated successfully".to_string(),
        event_id,
    }))
}

/// DELETE /events/:id - Delete an event (organizer who created it)
pub async fn delete_event(
    Organizer(claims): Organizer,
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<EventMessage>, ApiError> {
    require_ownership(&state.events, &event_id, &claims)?;
    let event = state.events.delete(&event_id)?;

    info!(%event_id, "Event deleted");
    Ok(Json(EventMessage {
        message: "Event deleted successfully".to_string(),
        event,
    }))
}

/// POST /events/:id/register - Register the caller for an event
///
/// Sends a confirmation mail in the background; mail failures never affect
/// the response.
pub async fn register_for_event(
    AuthUser(claims): AuthUser,
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<EventMessage>, ApiError> {
    let event = state.events.register_attendee(&event_id, &claims.user_id)?;
    info!(%event_id, user_id = %claims.user_id, "Attendee registered");

    let email = registration_email(&state.mail_from, &claims.email, &event);
    spawn_notification(Arc::clone(&state.mailer), email);

    Ok(Json(EventMessage {
        message: "User registered successfully".to_string(),
        event,
    }))
}
