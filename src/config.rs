// src/config.rs
use std::net::IpAddr;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://shop.db?mode=rwc";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("failed to hash admin password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// bcrypt hash of the shared admin password.
    pub admin_password_hash: String,
    pub session_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `ADMIN_PASSWORD_HASH` wins over `ADMIN_PASSWORD`; a plaintext password
    /// is hashed here so it is never kept around.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = match non_empty("HOST") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "HOST", value: raw })?,
            None => DEFAULT_HOST.parse().map_err(|_| ConfigError::Invalid {
                name: "HOST",
                value: DEFAULT_HOST.to_string(),
            })?,
        };

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let cost = match non_empty("BCRYPT_COST") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(cost) if (4..=31).contains(&cost) => cost,
                _ => return Err(ConfigError::Invalid { name: "BCRYPT_COST", value: raw }),
            },
            None => bcrypt::DEFAULT_COST,
        };

        let admin_password_hash = match (non_empty("ADMIN_PASSWORD_HASH"), lookup("ADMIN_PASSWORD")) {
            (Some(hash), _) => hash,
            (None, Some(password)) if !password.is_empty() => bcrypt::hash(&password, cost)?,
            _ => return Err(ConfigError::Missing("ADMIN_PASSWORD")),
        };

        let session_secret = non_empty("SESSION_SECRET").ok_or(ConfigError::Missing("SESSION_SECRET"))?;

        Ok(Self {
            database_url,
            host,
            port,
            admin_password_hash,
            session_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_absent() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ADMIN_PASSWORD_HASH", "$2b$04$precomputed"),
            ("SESSION_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.host.to_string(), DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.admin_password_hash, "$2b$04$precomputed");
    }

    #[test]
    fn plaintext_password_is_hashed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ADMIN_PASSWORD", "hunter2"),
            ("BCRYPT_COST", "4"),
            ("SESSION_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_ne!(config.admin_password_hash, "hunter2");
        assert!(bcrypt::verify("hunter2", &config.admin_password_hash).unwrap());
    }

    #[test]
    fn missing_secret_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("ADMIN_PASSWORD_HASH", "$2b$04$x")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SESSION_SECRET")));
    }

    #[test]
    fn missing_password_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", "s3cret")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ADMIN_PASSWORD")));
    }

    #[test]
    fn rejects_out_of_range_cost() {
        let err = AppConfig::from_lookup(lookup(&[
            ("ADMIN_PASSWORD", "hunter2"),
            ("BCRYPT_COST", "2"),
            ("SESSION_SECRET", "s3cret"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "BCRYPT_COST", .. }));
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[
            ("ADMIN_PASSWORD_HASH", "$2b$04$x"),
            ("SESSION_SECRET", "s3cret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }
}
