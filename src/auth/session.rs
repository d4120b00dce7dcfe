// src/auth/session.rs
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::AppError;

pub const SESSION_COOKIE: &str = "admin_session";
pub const SESSION_TTL_SECONDS: i64 = 8 * 60 * 60;
pub const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub scope: String,
    pub iat: usize,
    pub exp: usize,
}

impl SessionClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp as i64, 0)
    }
}

/// HS256 keys for everything the server signs into cookies.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AppError::internal(format!("Token signing failed: {e}")))
    }

    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, AppError> {
        decode::<T>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|d| d.claims)
            .map_err(|e| AppError::validation(format!("Invalid or expired token: {e}")))
    }

    /// Signs a fresh admin session valid for [`SESSION_TTL_SECONDS`].
    pub fn issue_session(&self) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(SESSION_TTL_SECONDS);
        let claims = SessionClaims {
            sub: ADMIN_SUBJECT.to_string(),
            scope: ADMIN_SUBJECT.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };
        self.sign(&claims)
    }

    pub fn verify_session(&self, token: &str) -> Result<SessionClaims, AppError> {
        let claims: SessionClaims = self.verify(token)?;
        if claims.scope != ADMIN_SUBJECT {
            return Err(AppError::validation("Token is not an admin session"));
        }
        Ok(claims)
    }
}
