// src/auth/password.rs
use bcrypt::{hash, verify, BcryptError};

use crate::error::AppError;

/// The shared admin password, held only as a bcrypt hash.
#[derive(Clone)]
pub struct AdminCredentials {
    password_hash: String,
}

impl AdminCredentials {
    pub fn from_hash(password_hash: impl Into<String>) -> Self {
        Self { password_hash: password_hash.into() }
    }

    pub fn from_password(password: &str, cost: u32) -> Result<Self, BcryptError> {
        Ok(Self::from_hash(hash(password, cost)?))
    }

    pub fn verify(&self, candidate: &str) -> Result<bool, AppError> {
        verify(candidate, &self.password_hash)
            .map_err(|e| AppError::internal(format!("Password verify error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password_only() {
        let creds = AdminCredentials::from_password("open sesame", 4).unwrap();
        assert!(creds.verify("open sesame").unwrap());
        assert!(!creds.verify("open-sesame").unwrap());
        assert!(!creds.verify("").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_internal_error() {
        let creds = AdminCredentials::from_hash("plaintext");
        assert!(matches!(creds.verify("plaintext"), Err(AppError::Internal(_))));
    }
}
