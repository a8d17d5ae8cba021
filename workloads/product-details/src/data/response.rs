//! Product query responses.

use serde::{Deserialize, Deserializer, Serialize};
use turbo_catalog::catalog::ProductDetails;

use crate::error::FetchError;

/// An error entry of a query response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl GraphqlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }
}

/// `data` block of the product details query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductQueryData {
    /// `None`: the field is absent. `Some(None)`: the source answered `null`.
    #[serde(default, deserialize_with = "present")]
    pub product: Option<Option<ProductDetails>>,
}

/// Response of the product details query.
///
/// Partial data and errors can arrive together; both are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductQueryResponse {
    #[serde(default)]
    pub data: Option<ProductQueryData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl ProductQueryResponse {
    /// A response carrying a product.
    pub fn found(product: ProductDetails) -> Self {
        Self {
            data: Some(ProductQueryData {
                product: Some(Some(product)),
            }),
            errors: Vec::new(),
        }
    }

    /// A response where the source confirmed there is no such product.
    pub fn not_found() -> Self {
        Self {
            data: Some(ProductQueryData {
                product: Some(None),
            }),
            errors: Vec::new(),
        }
    }

    /// A response with errors and no data.
    pub fn failed(errors: Vec<GraphqlError>) -> Self {
        Self { data: None, errors }
    }

    /// Parse a JSON response body.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Classify the response for the page.
    pub fn into_fetched(self) -> Fetched<ProductDetails> {
        match self.data.and_then(|data| data.product) {
            Some(Some(product)) => Fetched::Present(product),
            Some(None) => Fetched::Missing,
            None if self.errors.is_empty() => Fetched::Pending,
            None => Fetched::Failed(join_messages(&self.errors)),
        }
    }
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Deserialize a present field (even `null`) as `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Load state of the page's product.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// Nothing has arrived yet.
    Pending,
    /// The request failed without delivering data.
    Failed(String),
    /// The source confirmed the object does not exist.
    Missing,
    /// Data arrived (possibly partial).
    Present(T),
}

impl<T> Fetched<T> {
    pub fn as_present(&self) -> Option<&T> {
        match self {
            Fetched::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Fetched::Missing)
    }
}

impl<T> Default for Fetched<T> {
    fn default() -> Self {
        Fetched::Pending
    }
}

impl From<Result<ProductQueryResponse, FetchError>> for Fetched<ProductDetails> {
    fn from(result: Result<ProductQueryResponse, FetchError>) -> Self {
        match result {
            Ok(response) => response.into_fetched(),
            Err(e) => Fetched::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_product() {
        let body = r#"{"data": {"product": {"id": "UHJvZHVjdDox", "name": "Tee"}}}"#;
        let fetched = ProductQueryResponse::from_json(body).unwrap().into_fetched();
        assert_eq!(fetched.as_present().unwrap().name.as_deref(), Some("Tee"));
    }

    #[test]
    fn test_null_product_is_missing() {
        let body = r#"{"data": {"product": null}}"#;
        let fetched = ProductQueryResponse::from_json(body).unwrap().into_fetched();
        assert!(fetched.is_missing());
    }

    #[test]
    fn test_absent_product_is_pending() {
        let body = r#"{"data": {}}"#;
        let fetched = ProductQueryResponse::from_json(body).unwrap().into_fetched();
        assert_eq!(fetched, Fetched::Pending);
    }

    #[test]
    fn test_errors_without_data_fail() {
        let body = r#"{"data": null, "errors": [{"message": "timeout"}, {"message": "upstream"}]}"#;
        let response = ProductQueryResponse::from_json(body).unwrap();
        assert!(response.has_errors());
        assert_eq!(response.into_fetched(), Fetched::Failed("timeout; upstream".to_string()));
    }

    #[test]
    fn test_partial_data_with_errors_is_present() {
        let body = r#"{
            "data": {"product": {"id": "UHJvZHVjdDox", "name": "Tee", "pricing": null}},
            "errors": [{"message": "pricing unavailable", "path": ["product", "pricing"]}]
        }"#;
        let response = ProductQueryResponse::from_json(body).unwrap();
        assert_eq!(response.errors[0].path.len(), 2);

        let product = response.into_fetched();
        assert!(product.as_present().unwrap().pricing.is_none());
    }

    #[test]
    fn test_fetch_error_fails() {
        let fetched: Fetched<ProductDetails> = Err(FetchError::Request("offline".to_string())).into();
        assert_eq!(fetched, Fetched::Failed("Request failed: offline".to_string()));
    }

    #[test]
    fn test_invalid_body() {
        assert!(matches!(
            ProductQueryResponse::from_json("<html>"),
            Err(FetchError::Parse(_))
        ));
    }
}
