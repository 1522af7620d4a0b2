//! Data types for the Event Hub server
//!
//! Domain records (users, events) plus the request payloads accepted by the
//! REST API. Wire names follow the camelCase JSON used by clients.

mod event;
mod request;
mod user;

pub use event::{Event, EventSummary, EventUpdate, NewEvent};
pub use request::{EventRequest, LoginRequest, RegisterRequest};
pub use user::{NewUser, Role, User, UserProfile};
