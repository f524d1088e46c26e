//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while loading a catalog or configuring links.
///
/// Interaction and rendering never fail; only the collaborators at the edge
/// (catalog file, settings) produce these.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON or not an array.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Link settings are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
