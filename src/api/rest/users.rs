//! Account endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::types::{LoginRequest, RegisterRequest, UserProfile};
use crate::validation::{validate_login, validate_registration};

/// Response for POST /users/register
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(flatten)]
    pub user: UserProfile,
}

/// Response for POST /users/login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// POST /users/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(req) = payload?;
    let new_user = validate_registration(&req)?;

    // bcrypt is CPU bound; keep it off the async workers
    let hasher = state.credentials.hasher();
    let password = new_user.password;
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    let user_id = state.users.create(
        new_user.name.clone(),
        new_user.email.clone(),
        password_hash,
        new_user.role,
    )?;

    info!(%user_id, role = %new_user.role, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: UserProfile {
                user_id,
                name: new_user.name,
                email: new_user.email,
                role: new_user.role,
            },
        }),
    ))
}

/// POST /users/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload?;
    let (email, password) = validate_login(&req)?;

    let worker_state = Arc::clone(&state);
    let user = tokio::task::spawn_blocking(move || {
        worker_state
            .credentials
            .authenticate(&worker_state.users, &email, &password)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    let token = state.credentials.issue_token(&user)?;
    info!(user_id = %user.user_id, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
