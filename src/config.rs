//! Server configuration
//!
//! Environment:
//! - PORT: listen port (default 3000)
//! - JWT_SECRET: token signing secret (required, min 32 chars)
//! - JWT_EXPIRATION: token lifetime, seconds or `30m` / `1h` / `7d` (default 1h, max 365d)
//! - SALT_ROUNDS: bcrypt cost, 4..=31 (default bcrypt's DEFAULT_COST)
//! - SENDGRID_API_KEY: mail provider key (optional; unset logs mail instead)
//! - MAIL_FROM: sender address for notifications
//!
//! A `.env` file in the working directory is loaded first if present.

use std::env;

use thiserror::Error;
use tracing::warn;

use crate::auth::PasswordHasher;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set")]
    MissingSecret,
    #[error("JWT_SECRET must be at least {0} characters")]
    SecretTooShort(usize),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_seconds: i64,
    pub bcrypt_cost: u32,
    pub sendgrid_api_key: Option<String>,
    pub mail_from: String,
}

impl AppConfig {
    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_TOKEN_TTL: i64 = 3600;
    pub const MAX_TOKEN_TTL: i64 = 365 * 86400;
    pub const MIN_SECRET_LEN: usize = 32;
    pub const DEFAULT_MAIL_FROM: &'static str = "noreply@event-hub.local";

    /// Load from the process environment (and `.env`)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingSecret)?;
        if jwt_secret.len() < Self::MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort(Self::MIN_SECRET_LEN));
        }

        let port = match get("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid PORT, using default");
                Self::DEFAULT_PORT
            }),
            None => Self::DEFAULT_PORT,
        };

        let token_ttl_seconds = match get("JWT_EXPIRATION") {
            Some(raw) => match parse_duration_secs(&raw) {
                Some(secs) if secs <= Self::MAX_TOKEN_TTL => secs,
                _ => {
                    warn!(value = %raw, "Invalid JWT_EXPIRATION, using default");
                    Self::DEFAULT_TOKEN_TTL
                }
            },
            None => Self::DEFAULT_TOKEN_TTL,
        };

        let default_cost = PasswordHasher::default().cost();
        let bcrypt_cost = match get("SALT_ROUNDS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(cost) if (PasswordHasher::MIN_COST..=PasswordHasher::MAX_COST).contains(&cost) => {
                    cost
                }
                _ => {
                    warn!(value = %raw, "Invalid SALT_ROUNDS, using default");
                    default_cost
                }
            },
            None => default_cost,
        };

        Ok(Self {
            port,
            jwt_secret,
            token_ttl_seconds,
            bcrypt_cost,
            sendgrid_api_key: get("SENDGRID_API_KEY"),
            mail_from: get("MAIL_FROM").unwrap_or_else(|| Self::DEFAULT_MAIL_FROM.to_string()),
        })
    }
}

/// Parse `3600`, `45s`, `30m`, `1h` or `7d` into seconds. Zero is rejected.
pub fn parse_duration_secs(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (digits, unit) = match raw.char_indices().last()? {
        (idx, c) if c.is_ascii_alphabetic() => (&raw[..idx], c.to_ascii_lowercase()),
        _ => (raw, 's'),
    };

    let value: i64 = digits.parse().ok()?;
    let multiplier = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return None,
    };

    value
        .checked_mul(multiplier)
        .filter(|secs| *secs > 0)
}
