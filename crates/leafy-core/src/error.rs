//! Core error type for the Leafy admin back-office.
//!
//! [`LeafyError`] covers parameter validation failures raised by the CRUD
//! bindings, lookup failures and HTTP failures raised by the entity adapter,
//! and configuration errors raised while loading settings.

use thiserror::Error;

/// The primary error type shared by every Leafy crate.
///
/// Each variant maps to an HTTP status code via [`LeafyError::status_code`],
/// which the dashboard router uses when answering the UI.
#[derive(Error, Debug)]
pub enum LeafyError {
    // ── Request validation ───────────────────────────────────────────

    /// A request parameter was missing or malformed (e.g. a non-numeric page).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The operation name is not part of the closed operation set.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// No CRUD is registered under the requested name.
    #[error("Unknown CRUD: {0}")]
    UnknownCrud(String),

    /// An update or delete was attempted on an entity that carries no id.
    #[error("Object of type \"{0}\" has no id")]
    MissingIdentifier(String),

    // ── Remote resource ──────────────────────────────────────────────

    /// The backend did not return the requested entity.
    #[error("Object of type \"{entity_type}\" with id \"{id}\" was not found.")]
    NotFound {
        /// The entity type name (e.g. "book").
        entity_type: String,
        /// The requested identifier.
        id: String,
    },

    /// The backend answered a write request with a non-success status.
    #[error("Backend responded with status {status}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, or a fallback message when it was unreadable.
        message: String,
    },

    /// The request never produced a response (connection refused, bad URL, ...).
    #[error("HTTP error: {0}")]
    Http(String),

    // ── Serialization ────────────────────────────────────────────────

    /// A payload could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LeafyError {
    /// Builds a [`LeafyError::NotFound`] for the given entity type and id.
    pub fn not_found(entity_type: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Returns the HTTP status code the UI should see for this error.
    ///
    /// - `InvalidParameter`, `MissingIdentifier`, `Serialization` -> 400
    /// - `NotFound`, `UnknownOperation`, `UnknownCrud` -> 404
    /// - `Status`, `Http` -> 502 (the backend failed, not the admin)
    /// - Everything else -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidParameter(_) | Self::MissingIdentifier(_) | Self::Serialization(_) => 400,
            Self::NotFound { .. } | Self::UnknownOperation(_) | Self::UnknownCrud(_) => 404,
            Self::Status { .. } | Self::Http(_) => 502,
            Self::ConfigurationError(_) | Self::IoError(_) => 500,
        }
    }
}

impl From<serde_json::Error> for LeafyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A convenience type alias for `Result<T, LeafyError>`.
pub type LeafyResult<T> = Result<T, LeafyError>;
