//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while handling catalog data.
///
/// Reconciliation itself never fails; these cover identifier translation and
/// decoding of catalog payloads.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Database identifier cannot be translated into a global id.
    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),

    /// Global id is not valid base64 or lacks the `Type:id` shape.
    #[error("Malformed global id: {0}")]
    MalformedGlobalId(String),

    /// Global id decodes to a different object type than expected.
    #[error("Global id type mismatch: expected {expected}, got {got}")]
    GlobalIdTypeMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
