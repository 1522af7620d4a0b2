//! Event Hub
//!
//! An event management REST backend holding all state in memory.
//! Users register and log in, organizers manage their events, attendees
//! register for events and receive a confirmation mail.
//!
//! # Modules
//!
//! - `types`: Core data structures (User, Event, request payloads)
//! - `store`: Thread-safe in-memory user and event stores
//! - `auth`: Password hashing, JWT session tokens, access control extractors
//! - `validation`: Request payload validation
//! - `notify`: Best-effort outbound mail
//! - `api`: Axum router, handlers and error mapping
//! - `config`: Environment configuration
//! - `utils`: Time helpers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use event_hub::{create_router, AppState, CredentialService, LogMailer, PasswordHasher, TokenCodec};
//!
//! #[tokio::main]
//! async fn main() {
//!     let credentials = CredentialService::new(
//!         PasswordHasher::default(),
//!         TokenCodec::new("a-secret-of-at-least-thirty-two-chars!", 3600),
//!     );
//!     let state = Arc::new(AppState::new(credentials, Arc::new(LogMailer), "noreply@example.com"));
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, create_router(state)).await.unwrap();
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod notify;
pub mod store;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use api::{create_router, ApiError, AppState};
pub use auth::{AuthError, Claims, CredentialService, PasswordHasher, TokenCodec};
pub use config::{AppConfig, ConfigError};
pub use notify::{Email, LogMailer, MailError, Mailer, SendGridMailer};
pub use store::{EventStore, StoreError, UserStore};
pub use types::{Event, EventSummary, EventUpdate, Role, User, UserProfile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
