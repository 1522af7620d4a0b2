//! Signed session tokens (HS256 JWT)

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::types::{Role, User};
use crate::utils::time::current_timestamp;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    #[serde(rename = "profile")]
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for `user` expiring `ttl_seconds` from now
    pub fn for_user(user: &User, ttl_seconds: i64) -> Result<Self, AuthError> {
        let now = current_timestamp();
        let exp = now
            .checked_add(ttl_seconds)
            .ok_or_else(|| AuthError::Token(format!("token lifetime {ttl_seconds}s out of range")))?;

        Ok(Self {
            user_id: user.user_id.clone(),
            email: user.email.clone(),
            role: user.role,
            iat: now,
            exp,
        })
    }

    pub fn is_expired(&self) -> bool {
        current_timestamp() >= self.exp
    }
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and verifies session tokens with a shared server secret
pub struct TokenCodec {
    keys: Option<SigningKeys>,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenCodec {
    /// An empty secret yields a codec that refuses to issue or verify.
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        let keys = (!secret.is_empty()).then(|| SigningKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        });

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            keys,
            validation,
            ttl_seconds,
        }
    }

    /// Issue a token for `user` using the configured lifetime
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        self.encode_claims(&Claims::for_user(user, self.ttl_seconds)?)
    }

    /// Sign an explicit claim set
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AuthError> {
        let keys = self.keys.as_ref().ok_or(AuthError::MissingSecret)?;
        encode(&Header::new(Algorithm::HS256), claims, &keys.encoding)
            .map_err(|e| AuthError::Token(e.to_string()))
    }

    /// Check signature and expiry. User existence is not checked here.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let keys = self.keys.as_ref().ok_or(AuthError::MissingSecret)?;
        let data = decode::<Claims>(token, &keys.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::InvalidToken("token has expired".to_string()),
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        if data.claims.is_expired() {
            return Err(AuthError::InvalidToken("token has expired".to_string()));
        }

        Ok(data.claims)
    }
}
