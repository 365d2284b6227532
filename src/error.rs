//! Error types for the ECycle client

use indexmap::IndexMap;
use thiserror::Error;

/// Per-field validation messages, kept in field order for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(IndexMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Client-local validation failure; never reaches the network.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Transport failure or timeout. Surfaced as a generic banner, no retry.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Structured rejection from the backend (4xx with message/errors).
    #[error("Request rejected ({status}): {message}")]
    Backend { status: u16, message: String },

    /// 401 anywhere: the session is cleared and the shell navigates to login.
    #[error("Session expired")]
    AuthExpired,

    #[error("Not found: {0}")]
    NotFound(String),

    /// External dependency (map/geocoding) unavailable; non-fatal.
    #[error("{0} is unavailable")]
    Degraded(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for client operations
pub type AppResult<T> = Result<T, AppError>;
