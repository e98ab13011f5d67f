//! JWT authentication.
//!
//! Authentication is an external collaborator: its only contract with the
//! engine is "resolve request → [`CallerIdentity`] or none". Tokens are
//! HS256-signed with a shared secret; when auth is disabled (local
//! development, tests) a fixed local identity is handed out instead.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AuthConfig;
use crate::models::CallerIdentity;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("JWT processing error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuthHeader,

    #[error("Invalid authorization header format")]
    InvalidAuthFormat,
}

/// JWT claims for editor/admin sessions.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject: the user id
    pub sub: String,
    /// Display name
    pub name: String,
    /// Role (e.g. ADMIN, EDITOR)
    pub role: String,
    /// Token issuer
    pub iss: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

#[derive(Clone)]
pub struct JwtAuthenticator {
    config: AuthConfig,
    encoding_key: Option<EncodingKey>,
    decoding_key: Option<DecodingKey>,
}

impl JwtAuthenticator {
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        if !config.enabled {
            debug!("JWT authentication disabled");
            return Ok(Self {
                config: config.clone(),
                encoding_key: None,
                decoding_key: None,
            });
        }

        if config.jwt_secret.is_empty() {
            return Err(AuthError::ConfigurationError(
                "JWT secret not configured".to_string(),
            ));
        }

        Ok(Self {
            config: config.clone(),
            encoding_key: Some(EncodingKey::from_secret(config.jwt_secret.as_bytes())),
            decoding_key: Some(DecodingKey::from_secret(config.jwt_secret.as_bytes())),
        })
    }

    /// Validate a session token and resolve the caller identity.
    pub fn validate_token(&self, token: &str) -> Result<CallerIdentity, AuthError> {
        if !self.config.enabled {
            return Ok(CallerIdentity::local_admin());
        }

        let decoding_key = self.decoding_key.as_ref().ok_or_else(|| {
            AuthError::ConfigurationError("Decoding key not configured".to_string())
        })?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.jwt_issuer]);
        validation.validate_exp = true;

        let token_data = decode::<SessionClaims>(token, decoding_key, &validation).map_err(|e| {
            warn!(error = %e, "JWT token validation failed");
            AuthError::JwtError(e)
        })?;

        let claims = token_data.claims;
        let user_id: i64 = claims.sub.parse().map_err(|_| {
            AuthError::InvalidToken(format!("subject is not a user id: {}", claims.sub))
        })?;

        debug!(user_id, role = %claims.role, "session token validated");

        Ok(CallerIdentity {
            user_id,
            name: claims.name,
            role: claims.role,
        })
    }

    /// Generate a session token for a caller.
    pub fn generate_token(&self, identity: &CallerIdentity) -> Result<String, AuthError> {
        if !self.config.enabled {
            return Ok(format!("test-token-{}", identity.user_id));
        }

        let encoding_key = self.encoding_key.as_ref().ok_or_else(|| {
            AuthError::ConfigurationError("Encoding key not configured".to_string())
        })?;

        let now = Utc::now();
        let expiry = now + Duration::hours(self.config.token_expiry_hours as i64);

        let claims = SessionClaims {
            sub: identity.user_id.to_string(),
            name: identity.name.clone(),
            role: identity.role.clone(),
            iss: self.config.jwt_issuer.clone(),
            exp: expiry.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, encoding_key)?;
        Ok(token)
    }
}

/// Extract a Bearer token from an Authorization header value.
pub fn extract_bearer_token(auth_header: &str) -> Result<&str, AuthError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthFormat)?;

    if token.is_empty() {
        return Err(AuthError::InvalidAuthFormat);
    }

    Ok(token)
}
