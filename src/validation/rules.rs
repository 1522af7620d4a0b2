//! Validation rules for registration, login and event payloads

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::ValidationError;
use crate::types::{
    EventRequest, EventUpdate, LoginRequest, NewEvent, NewUser, RegisterRequest, Role,
};
use crate::utils::time::parse_instant;

/// Minimum raw password length, checked before hashing
pub const MIN_PASSWORD_LEN: usize = 6;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

const INVALID_EMAIL: &str = "Invalid Email";
const INVALID_NAME: &str = "Invalid Name";
const INVALID_PASSWORD: &str = "Password must be at least 6 characters long";
const INVALID_PROFILE: &str = "Profile must be either ORGANIZER or ATTENDEE";
const INVALID_DESCRIPTION: &str = "Invalid Description";
const INVALID_DATE: &str = "Invalid Date";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

fn email(value: Option<&Value>) -> Result<String, ValidationError> {
    match value.and_then(Value::as_str) {
        Some(email) if is_valid_email(email) => Ok(email.to_string()),
        _ => Err(ValidationError::new(INVALID_EMAIL)),
    }
}

fn non_blank(value: Option<&Value>, message: &str) -> Result<String, ValidationError> {
    match value.and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(ValidationError::new(message)),
    }
}

fn password(value: Option<&Value>) -> Result<String, ValidationError> {
    match value.and_then(Value::as_str) {
        Some(pw) if pw.chars().count() >= MIN_PASSWORD_LEN => Ok(pw.to_string()),
        _ => Err(ValidationError::new(INVALID_PASSWORD)),
    }
}

fn role(value: Option<&Value>) -> Result<Role, ValidationError> {
    value
        .and_then(Value::as_str)
        .and_then(Role::parse)
        .ok_or_else(|| ValidationError::new(INVALID_PROFILE))
}

fn date(value: Option<&Value>) -> Result<String, ValidationError> {
    match value.and_then(Value::as_str) {
        Some(d) if parse_instant(d).is_some() => Ok(d.to_string()),
        _ => Err(ValidationError::new(INVALID_DATE)),
    }
}

/// Registration: email, name, password, profile
pub fn validate_registration(req: &RegisterRequest) -> Result<NewUser, ValidationError> {
    let email = email(req.email.as_ref())?;
    let name = non_blank(req.name.as_ref(), INVALID_NAME)?;
    let password = password(req.password.as_ref())?;
    let role = role(req.profile.as_ref())?;

    Ok(NewUser {
        name,
        email,
        password,
        role,
    })
}

/// Login: email, password. Returns the pair to authenticate with.
pub fn validate_login(req: &LoginRequest) -> Result<(String, String), ValidationError> {
    let email = email(req.email.as_ref())?;
    let password = password(req.password.as_ref())?;
    Ok((email, password))
}

/// New event: name, description, date (all required)
pub fn validate_new_event(req: &EventRequest) -> Result<NewEvent, ValidationError> {
    let name = non_blank(req.name.as_ref(), INVALID_NAME)?;
    let description = non_blank(req.description.as_ref(), INVALID_DESCRIPTION)?;
    let date = date(req.date.as_ref())?;

    Ok(NewEvent {
        name,
        description,
        date,
    })
}

/// Event update: same rules, applied only to supplied fields
pub fn validate_event_update(req: &EventRequest) -> Result<EventUpdate, ValidationError> {
    let name = match &req.name {
        Some(value) => Some(non_blank(Some(value), INVALID_NAME)?),
        None => None,
    };
    let description = match &req.description {
        Some(value) => Some(non_blank(Some(value), INVALID_DESCRIPTION)?),
        None => None,
    };
    let date = match &req.date {
        Some(value) => Some(date(Some(value))?),
        None => None,
    };

    Ok(EventUpdate {
        name,
        description,
        date,
    })
}
