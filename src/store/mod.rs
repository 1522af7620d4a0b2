//! In-memory stores
//!
//! Process-lifetime storage for users and events. Each store guards its
//! tables with a single `RwLock`; every mutation holds the write lock for
//! its whole check-then-mutate sequence.

mod events;
mod users;

pub use events::EventStore;
pub use users::UserStore;

use thiserror::Error;

/// Store operation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("User with this email already exists")]
    DuplicateEmail,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("User already registered for this event")]
    AlreadyRegistered,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
