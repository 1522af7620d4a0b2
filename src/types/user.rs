//! User types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role. Sent on the wire as the `profile` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Organizer,
    Attendee,
}

impl Role {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Organizer => "ORGANIZER",
            Role::Attendee => "ATTENDEE",
        }
    }

    /// Exact-match parse of the wire representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ORGANIZER" => Some(Role::Organizer),
            "ATTENDEE" => Some(Role::Attendee),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered user as held by the identity store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validated registration input, password still in the clear
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Public projection of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "profile")]
    pub role: Role,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_exact() {
        assert_eq!(Role::parse("ORGANIZER"), Some(Role::Organizer));
        assert_eq!(Role::parse("ATTENDEE"), Some(Role::Attendee));
        assert_eq!(Role::parse("organizer"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Organizer).unwrap(), "\"ORGANIZER\"");
        let role: Role = serde_json::from_str("\"ATTENDEE\"").unwrap();
        assert_eq!(role, Role::Attendee);
    }

    #[test]
    fn test_profile_hides_password_hash() {
        let user = User {
            user_id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$2b$04$secret".to_string(),
            role: Role::Organizer,
        };

        let json = serde_json::to_value(UserProfile::from(&user)).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["profile"], "ORGANIZER");
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("secret"));
    }
}
