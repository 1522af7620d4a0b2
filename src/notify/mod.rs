//! Outbound email notifications
//!
//! Notifications are best-effort: they run on a detached task after the
//! response has been produced, and a failed send is only logged.

mod registration;
mod sendgrid;

pub use registration::{registration_email, spawn_notification};
pub use sendgrid::SendGridMailer;

use futures::future::BoxFuture;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Message handed to a mail provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
}

/// Mail delivery failures
#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail transport failed: {0}")]
    Transport(String),
    #[error("mail provider rejected message: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Transactional email sender
pub trait Mailer: Send + Sync {
    fn send(&self, email: Email) -> BoxFuture<'_, Result<(), MailError>>;
}

/// Mailer that only logs. Used when no provider key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, email: Email) -> BoxFuture<'_, Result<(), MailError>> {
        Box::pin(async move {
            info!(to = %email.to, subject = %email.subject, "Mail provider not configured, skipping send");
            Ok(())
        })
    }
}
