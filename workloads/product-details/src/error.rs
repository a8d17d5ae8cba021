//! Error types for the product page.

use thiserror::Error;
use turbo_catalog::CatalogError;

/// Errors reported by a product data source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed.
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

/// Errors surfaced by page setup.
///
/// Rendering itself never fails: missing data selects a fallback branch.
#[derive(Debug, Error)]
pub enum PageError {
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Page URL could not be parsed.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Route id could not be translated.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Data source failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
