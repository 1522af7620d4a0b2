//! Event registration confirmation mail

use std::sync::Arc;

use tracing::{info, warn};

use super::{Email, Mailer};
use crate::types::Event;
use crate::utils::time::display_date;

pub const REGISTRATION_SUBJECT: &str = "You Have Successfully Registered for the Event!";

/// Build the confirmation mail for an attendee
pub fn registration_email(from: &str, to: &str, event: &Event) -> Email {
    let html = format!(
        "<h1>Registration Successful</h1>\
         <p>Dear User,</p>\
         <p>You have successfully registered for the event: <strong>{name}</strong>.</p>\
         <p>Event Details:</p>\
         <ul>\
         <li><strong>Description:</strong> {description}</li>\
         <li><strong>Date:</strong> {date}</li>\
         </ul>\
         <p>Thank you for registering!</p>",
        name = escape_html(&event.name),
        description = escape_html(&event.description),
        date = escape_html(&display_date(&event.date)),
    );

    Email {
        to: to.to_string(),
        from: from.to_string(),
        subject: REGISTRATION_SUBJECT.to_string(),
        html,
    }
}

/// Send on a detached task. The outcome is logged and never reported back.
pub fn spawn_notification(mailer: Arc<dyn Mailer>, email: Email) {
    tokio::spawn(async move {
        let to = email.to.clone();
        match mailer.send(email).await {
            Ok(()) => info!(%to, "Notification email sent"),
            Err(e) => warn!(%to, error = %e, "Failed to send notification email"),
        }
    });
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_email_contents() {
        let event = Event::new(
            "RustConf".to_string(),
            "Talks & <workshops>".to_string(),
            "org".to_string(),
            "2026-09-01".to_string(),
        );

        let email = registration_email("noreply@example.com", "b@example.com", &event);
        assert_eq!(email.to, "b@example.com");
        assert_eq!(email.from, "noreply@example.com");
        assert_eq!(email.subject, REGISTRATION_SUBJECT);
        assert!(email.html.contains("<strong>RustConf</strong>"));
        assert!(email.html.contains("Talks &amp; &lt;workshops&gt;"));
        assert!(email.html.contains("September 1, 2026"));
    }
}
