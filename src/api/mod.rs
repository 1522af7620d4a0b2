//! HTTP API: router, shared state, handlers and error mapping

pub mod error;
pub mod http;
pub mod rest;
pub mod state;

pub use error::ApiError;
pub use http::create_router;
pub use state::AppState;
