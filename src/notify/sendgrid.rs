//! SendGrid v3 mail sender

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{Client, ClientBuilder};
use serde_json::json;
use tracing::debug;

use super::{Email, MailError, Mailer};

const SENDGRID_ENDPOINT: &str = "https://api.sendgrid.com/v3/mail/send";

/// Sends mail through the SendGrid HTTP API
pub struct SendGridMailer {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl SendGridMailer {
    pub fn new(api_key: impl Into<String>) -> Result<Self, MailError> {
        Self::with_endpoint(api_key, SENDGRID_ENDPOINT)
    }

    /// Point the sender at a different endpoint (sandbox, local stub)
    pub fn with_endpoint(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, MailError> {
        let client = ClientBuilder::new()
            .user_agent(concat!("event-hub/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| MailError::Transport(format!("build client failed: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        })
    }

    fn payload(email: &Email) -> serde_json::Value {
        json!({
            "personalizations": [{ "to": [{ "email": email.to }] }],
            "from": { "email": email.from },
            "subject": email.subject,
            "content": [{ "type": "text/html", "value": email.html }],
        })
    }
}

impl Mailer for SendGridMailer {
    fn send(&self, email: Email) -> BoxFuture<'_, Result<(), MailError>> {
        Box::pin(async move {
            debug!(to = %email.to, endpoint = %self.endpoint, "Sending mail");

            let res = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&Self::payload(&email))
                .send()
                .await
                .map_err(|e| MailError::Transport(e.to_string()))?;

            let status = res.status();
            if status.is_success() {
                return Ok(());
            }

            let body = res.text().await.unwrap_or_default();
            Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let email = Email {
            to: "b@example.com".to_string(),
            from: "noreply@example.com".to_string(),
            subject: "Hi".to_string(),
            html: "<p>Hi</p>".to_string(),
        };

        let payload = SendGridMailer::payload(&email);
        assert_eq!(payload["personalizations"][0]["to"][0]["email"], "b@example.com");
        assert_eq!(payload["from"]["email"], "noreply@example.com");
        assert_eq!(payload["content"][0]["type"], "text/html");
        assert_eq!(payload["content"][0]["value"], "<p>Hi</p>");
    }
}
