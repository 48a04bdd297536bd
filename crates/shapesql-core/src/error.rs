//! Error types for schema conversion.

/// Errors that can occur while resolving a dialect or loading a schema.
///
/// Conversion itself never fails: non-table schemas, unmapped kinds and
/// array fields all degrade silently. Only the inputs around it can be
/// rejected.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested dialect is not registered.
    #[error("Unknown SQL dialect '{name}' (available: {})", .available.join(", "))]
    UnknownDialect {
        /// The name that was requested.
        name: String,
        /// Names known to the registry at lookup time.
        available: Vec<String>,
    },

    /// A schema document could not be parsed.
    #[error("Invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for schema conversion.
pub type Result<T> = std::result::Result<T, Error>;
