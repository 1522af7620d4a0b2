//! Password hashing

use bcrypt::{hash, verify, DEFAULT_COST};

use super::AuthError;

/// bcrypt hasher with a configurable work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Lowest and highest cost bcrypt accepts
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;

    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Salted one-way hash
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        hash(password, self.cost).map_err(|e| AuthError::Hash(e.to_string()))
    }

    /// Check a password against a stored hash. Malformed hashes never match.
    pub fn verify(&self, password: &str, password_hash: &str) -> bool {
        verify(password, password_hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let hashed = hasher.hash("secret1").unwrap();

        assert_ne!(hashed, "secret1");
        assert!(hasher.verify("secret1", &hashed));
        assert!(!hasher.verify("secret2", &hashed));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new(4);
        assert_ne!(hasher.hash("secret1").unwrap(), hasher.hash("secret1").unwrap());
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        assert!(!PasswordHasher::new(4).verify("secret1", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        let err = PasswordHasher::new(2).hash("secret1").unwrap_err();
        assert!(matches!(err, AuthError::Hash(_)));
    }
}
