//! Environment-driven configuration.
//!
//! Every setting has a default suitable for local development and can be
//! overridden through `PRESSROOM_*` environment variables.

use crate::error::{CmsError, Result};

#[derive(Debug, Clone)]
pub struct CmsConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: String,
    /// Root directory backing locally stored media objects.
    pub upload_root: String,
    /// When true, internal error detail is echoed to API clients instead of
    /// being logged server-side only.
    pub verbose_errors: bool,
    pub auth: AuthConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub enabled: bool,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub token_expiry_hours: u64,
}

/// Controls the periodic sweep that promotes due SCHEDULED articles.
///
/// Disabled by default: without it, scheduled articles stay scheduled until
/// an editor publishes them explicitly.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub enabled: bool,
    pub interval_seconds: u64,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/pressroom_development".to_string(),
            max_connections: 10,
            bind_address: "127.0.0.1:8080".to_string(),
            upload_root: "./public".to_string(),
            verbose_errors: false,
            auth: AuthConfig {
                enabled: true,
                jwt_secret: String::new(),
                jwt_issuer: "pressroom".to_string(),
                token_expiry_hours: 24,
            },
            scheduler: SchedulerConfig {
                enabled: false,
                interval_seconds: 60,
            },
        }
    }
}

impl CmsConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = db_url;
        }

        if let Ok(max_connections) = std::env::var("PRESSROOM_MAX_CONNECTIONS") {
            config.max_connections = max_connections.parse().map_err(|e| {
                CmsError::Configuration(format!("Invalid max_connections: {e}"))
            })?;
        }

        if let Ok(bind) = std::env::var("PRESSROOM_BIND_ADDRESS") {
            config.bind_address = bind;
        }

        if let Ok(root) = std::env::var("PRESSROOM_UPLOAD_ROOT") {
            config.upload_root = root;
        }

        if let Ok(verbose) = std::env::var("PRESSROOM_VERBOSE_ERRORS") {
            config.verbose_errors = verbose == "true" || verbose == "1";
        }

        if let Ok(enabled) = std::env::var("PRESSROOM_AUTH_ENABLED") {
            config.auth.enabled = enabled != "false" && enabled != "0";
        }

        if let Ok(secret) = std::env::var("PRESSROOM_JWT_SECRET") {
            config.auth.jwt_secret = secret;
        }

        if let Ok(issuer) = std::env::var("PRESSROOM_JWT_ISSUER") {
            config.auth.jwt_issuer = issuer;
        }

        if let Ok(expiry) = std::env::var("PRESSROOM_JWT_EXPIRY_HOURS") {
            config.auth.token_expiry_hours = expiry.parse().map_err(|e| {
                CmsError::Configuration(format!("Invalid token_expiry_hours: {e}"))
            })?;
        }

        if let Ok(enabled) = std::env::var("PRESSROOM_SCHEDULER_ENABLED") {
            config.scheduler.enabled = enabled == "true" || enabled == "1";
        }

        if let Ok(interval) = std::env::var("PRESSROOM_SCHEDULER_INTERVAL_SECONDS") {
            config.scheduler.interval_seconds = interval.parse().map_err(|e| {
                CmsError::Configuration(format!("Invalid scheduler interval: {e}"))
            })?;
        }

        if config.auth.enabled && config.auth.jwt_secret.is_empty() {
            return Err(CmsError::Configuration(
                "PRESSROOM_JWT_SECRET must be set when authentication is enabled".to_string(),
            ));
        }

        Ok(config)
    }

    /// Configuration for tests and local tooling: auth disabled, verbose errors on.
    pub fn insecure() -> Self {
        let mut config = Self::default();
        config.auth.enabled = false;
        config.verbose_errors = true;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CmsConfig::default();
        assert!(config.auth.enabled);
        assert!(!config.scheduler.enabled);
        assert!(!config.verbose_errors);
        assert_eq!(config.scheduler.interval_seconds, 60);
    }

    #[test]
    fn test_insecure_profile() {
        let config = CmsConfig::insecure();
        assert!(!config.auth.enabled);
        assert!(config.verbose_errors);
    }
}
