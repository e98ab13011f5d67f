//! Structured error handling for the content engine.
//!
//! Components return [`CmsError`] and the web layer maps it onto HTTP
//! responses in `web::response_types`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmsError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Object store error: {0}")]
    ObjectStore(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CmsError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn object_store(message: impl Into<String>) -> Self {
        Self::ObjectStore(message.into())
    }

    /// Whether this error leaves no observable side effect behind.
    ///
    /// The one exception in the system is the coupled media delete, which
    /// reports `Database` after the backing object is already gone.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Validation(_))
    }
}

impl From<sqlx::Error> for CmsError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound("Row"),
            other => Self::Database(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_fault_classification() {
        assert!(CmsError::NotFound("Article").is_client_fault());
        assert!(CmsError::validation("bad payload").is_client_fault());
        assert!(!CmsError::database("connection reset").is_client_fault());
        assert!(!CmsError::object_store("unlink failed").is_client_fault());
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(CmsError::NotFound("Article").to_string(), "Article not found");
    }
}
