//! Request payloads accepted by the REST API
//!
//! Fields are kept as raw JSON values so that missing or wrongly typed
//! fields reach the validators and produce field-specific messages instead
//! of a generic deserialization failure.

use serde::Deserialize;
use serde_json::Value;

/// POST /users/register
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
    #[serde(default)]
    pub profile: Option<Value>,
}

/// POST /users/login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

/// POST /events and PUT /events/:id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
}
