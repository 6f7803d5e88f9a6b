//! Application configuration loaded from environment variables.
//!
//! Everything has a development default so the server can start with an
//! empty environment; production deployments must set SESSION_SIGNING_KEY.

use std::env;

const DEFAULT_PORT: u16 = 8080;

// Matches the fallback secret the deployment scripts warn about. Anything
// signed with it is worthless outside local development.
const DEV_SIGNING_KEY: &str = "dev-secret-key-change-in-production";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Session token signing key (raw bytes)
    pub session_signing_key: Vec<u8>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => DEFAULT_PORT,
        };

        let session_signing_key = match env::var("SESSION_SIGNING_KEY") {
            Ok(key) if !key.trim().is_empty() => key.trim().to_string().into_bytes(),
            _ => {
                tracing::warn!("SESSION_SIGNING_KEY not set, using development key");
                DEV_SIGNING_KEY.as_bytes().to_vec()
            }
        };

        Ok(Self {
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            session_signing_key,
        })
    }

    /// Config with a fixed signing key, for tests only.
    pub fn test_default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_url: "http://localhost:5173".to_string(),
            session_signing_key: b"test_signing_key_32_bytes_long!!".to_vec(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
