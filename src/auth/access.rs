//! Request-level access control
//!
//! A request moves through `AuthUser` (bearer token resolved against the
//! identity store), then `Organizer` (role gate), then `require_ownership`
//! (event creator gate). Each step short-circuits with its own error.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use super::{AuthError, Claims, TokenCodec};
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::store::{EventStore, StoreError, UserStore};
use crate::types::{Event, Role};

/// Resolve a raw `Authorization` header value into verified claims.
///
/// The claims must reference a user that still exists.
pub fn resolve_bearer(
    header: Option<&str>,
    tokens: &TokenCodec,
    users: &UserStore,
) -> Result<Claims, AuthError> {
    let header = header
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::InvalidToken("malformed authorization header".to_string()))?;

    let claims = tokens.verify(token)?;

    if !users.contains(&claims.user_id) {
        return Err(AuthError::UserNotFound);
    }

    Ok(claims)
}

/// Fail with `Forbidden` unless the caller holds `role`
pub fn require_role(claims: &Claims, role: Role) -> Result<(), AuthError> {
    if claims.role == role {
        Ok(())
    } else {
        Err(AuthError::Forbidden(format!(
            "Access denied. User is not an {}.",
            role.as_str().to_lowercase()
        )))
    }
}

/// Load an event and check that the caller created it
pub fn require_ownership(
    events: &EventStore,
    event_id: &str,
    claims: &Claims,
) -> Result<Event, ApiError> {
    let event = events
        .get_by_id(event_id)
        .ok_or(StoreError::NotFound("Event"))?;

    if event.organizer_id != claims.user_id {
        return Err(AuthError::Forbidden(
            "Access denied. User has not created this event.".to_string(),
        )
        .into());
    }

    Ok(event)
}

/// Authenticated caller
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| {
                AuthError::InvalidToken("authorization header is not valid UTF-8".to_string())
            })?),
            None => None,
        };

        resolve_bearer(header, state.credentials.tokens(), &state.users)
            .map(AuthUser)
            .map_err(|e| {
                debug!(error = %e, path = %parts.uri.path(), "Rejected request credentials");
                e.into()
            })
    }
}

/// Authenticated caller holding the organizer role
#[derive(Debug, Clone)]
pub struct Organizer(pub Claims);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for Organizer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;
        require_role(&claims, Role::Organizer)?;
        Ok(Organizer(claims))
    }
}
