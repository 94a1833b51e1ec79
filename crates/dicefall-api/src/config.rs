//! Environment-based configuration.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Whether rolls are recorded in the in-memory log.
    pub store_rolls: bool,
    /// Admin token; `None` disables the admin endpoint entirely.
    pub admin_token: Option<String>,
    /// Cross-origin policy value; `*` allows any origin.
    pub allow_origin: String,
    /// Directory served as static files.
    pub static_dir: PathBuf,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `PORT` is set to something that is
    /// not a valid port number.
    pub fn from_env() -> Result<Self, AppError> {
        let port = match env::var("PORT") {
            Err(_) => 3000,
            Ok(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            store_rolls: store_rolls_enabled(env::var("STORE_ROLLS").ok().as_deref()),
            admin_token: normalize_token(env::var("ADMIN_TOKEN").ok()),
            allow_origin: env::var("ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            static_dir: env::var("STATIC_DIR")
                .map_or_else(|_| PathBuf::from("public"), PathBuf::from),
        })
    }
}

/// Only the literal `true`, case-insensitively, enables the roll log.
fn store_rolls_enabled(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// An unset or empty admin token fails closed.
fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_rolls_requires_literal_true() {
        assert!(store_rolls_enabled(Some("true")));
        assert!(store_rolls_enabled(Some("TRUE")));
        assert!(store_rolls_enabled(Some("True")));
        assert!(!store_rolls_enabled(Some("1")));
        assert!(!store_rolls_enabled(Some("yes")));
        assert!(!store_rolls_enabled(Some("")));
        assert!(!store_rolls_enabled(None));
    }

    #[test]
    fn test_empty_admin_token_normalizes_to_none() {
        assert_eq!(normalize_token(None), None);
        assert_eq!(normalize_token(Some(String::new())), None);
        assert_eq!(
            normalize_token(Some("secret".to_string())),
            Some("secret".to_string())
        );
    }
}
