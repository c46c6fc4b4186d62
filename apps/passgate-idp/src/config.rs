//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading: required variables must be present and valid, or the
//! application exits with a clear error message before binding a socket.

use passgate_auth::{SigningSecret, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS};
use std::env;
use thiserror::Error;

/// Development signing secret shipped in `.env.example`.
pub const INSECURE_DEV_SECRET: &str = "development-jwt-secret-change-in-production";

/// Shortest HMAC secret accepted without complaint.
pub const MIN_SECRET_BYTES: usize = 32;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5004;

/// Application environment mode.
///
/// - `Development`: insecure settings are allowed with WARN-level logging.
/// - `Production`: insecure settings refuse startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    /// Parse an `APP_ENV` value. `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }

    /// Returns true if this is production mode.
    #[must_use]
    pub fn is_production(&self) -> bool {
        *self == Self::Production
    }
}

impl std::fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    pub app_env: AppEnvironment,
    /// Raw `APP_ENV` when it was not recognized and `Development` was assumed.
    /// Logged by the caller once logging is up.
    pub unrecognized_app_env: Option<String>,
    /// HMAC signing secret (`JWT_SECRET`).
    pub jwt_secret: SigningSecret,
    /// Token lifetime in seconds (`TOKEN_TTL_SECS`).
    pub token_ttl_secs: i64,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub cors_origins: Vec<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_env", &self.app_env)
            .field("unrecognized_app_env", &self.unrecognized_app_env)
            .field("jwt_secret", &"[redacted]")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment, honouring `.env`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `JWT_SECRET` is missing or any value is invalid.
    ///
    /// # Variables
    ///
    /// - `JWT_SECRET` (required) - HMAC signing secret
    /// - `TOKEN_TTL_SECS` (default: 3600)
    /// - `APP_ENV` (default: development)
    /// - `HOST` (default: 0.0.0.0)
    /// - `PORT` (default: 5004)
    /// - `RUST_LOG` (default: info)
    /// - `CORS_ORIGINS` (comma separated, default: *)
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let raw_env = var("APP_ENV");
        let parsed_env = raw_env.as_deref().and_then(AppEnvironment::parse);
        let app_env = parsed_env.unwrap_or(AppEnvironment::Development);
        let unrecognized_app_env = raw_env.filter(|_| parsed_env.is_none());

        let jwt_secret = var("JWT_SECRET")
            .map(SigningSecret::from)
            .ok_or_else(|| ConfigError::MissingVar("JWT_SECRET".to_string()))?;

        let token_ttl_secs = match var("TOKEN_TTL_SECS") {
            None => DEFAULT_TOKEN_TTL_SECS,
            Some(raw) => match raw.parse::<i64>() {
                Ok(secs)
                    if secs > 0
                        && secs <= MAX_TOKEN_TTL_SECS
                        && chrono::Duration::try_seconds(secs).is_some() =>
                {
                    secs
                }
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "TOKEN_TTL_SECS".to_string(),
                        message: format!(
                            "expected 1-{MAX_TOKEN_TTL_SECS} seconds, got '{raw}'"
                        ),
                    })
                }
            },
        };

        let port = match var("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "PORT".to_string(),
                        message: format!("expected a port in 1-65535, got '{raw}'"),
                    })
                }
            },
        };

        let cors_origins = var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            app_env,
            unrecognized_app_env,
            jwt_secret,
            token_ttl_secs,
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            cors_origins,
        })
    }

    /// `host:port` to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Token lifetime as a duration. An out-of-range value becomes zero,
    /// which `TokenAuthority::new` rejects.
    #[must_use]
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::try_seconds(self.token_ttl_secs).unwrap_or_else(chrono::Duration::zero)
    }

    /// True if CORS allows any origin.
    #[must_use]
    pub fn is_wildcard_cors(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }

    /// Validate security configuration based on the application environment.
    ///
    /// In **production** mode: returns `Err(errors)` listing every issue found.
    /// In **development** mode: returns `Ok(warnings)` listing every issue found.
    ///
    /// Checks:
    /// - `JWT_SECRET` is at least 32 bytes
    /// - `JWT_SECRET` is not the development default
    /// - `CORS_ORIGINS` is not wildcard
    pub fn validate_security_config(&self) -> Result<Vec<String>, Vec<String>> {
        let mut issues = Vec::new();

        if self.jwt_secret.len() < MIN_SECRET_BYTES {
            issues.push(format!(
                "JWT_SECRET is shorter than {MIN_SECRET_BYTES} bytes"
            ));
        }

        if self.jwt_secret == SigningSecret::from(INSECURE_DEV_SECRET) {
            issues.push("JWT_SECRET is using the development default value".to_string());
        }

        if self.is_wildcard_cors() {
            issues.push("CORS_ORIGINS allows any origin (\"*\")".to_string());
        }

        if self.app_env.is_production() && !issues.is_empty() {
            Err(issues)
        } else {
            Ok(issues)
        }
    }
}
