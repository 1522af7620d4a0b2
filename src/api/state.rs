//! Shared application state

use std::sync::Arc;

use crate::auth::CredentialService;
use crate::notify::Mailer;
use crate::store::{EventStore, UserStore};

/// State shared by every request handler.
///
/// Built once at startup and handed to the router behind an `Arc`.
pub struct AppState {
    pub users: UserStore,
    pub events: EventStore,
    pub credentials: CredentialService,
    pub mailer: Arc<dyn Mailer>,
    /// Sender address for notification mail
    pub mail_from: String,
}

impl AppState {
    pub fn new(
        credentials: CredentialService,
        mailer: Arc<dyn Mailer>,
        mail_from: impl Into<String>,
    ) -> Self {
        Self {
            users: UserStore::new(),
            events: EventStore::new(),
            credentials,
            mailer,
            mail_from: mail_from.into(),
        }
    }
}
