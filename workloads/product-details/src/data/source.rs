//! Product data sources.

use std::collections::HashMap;

use async_trait::async_trait;
use turbo_catalog::catalog::ProductDetails;
use turbo_catalog::GlobalId;

use crate::data::ProductQueryResponse;
use crate::error::FetchError;

/// Source of product details, queried by global id.
///
/// Implementations keep partial data on partial failure and report it in
/// the response rather than failing the whole request.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the details of one product.
    async fn product_details(&self, id: &GlobalId) -> Result<ProductQueryResponse, FetchError>;
}

/// In-memory product source, keyed by encoded global id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductSource {
    products: HashMap<String, ProductDetails>,
    unavailable: Option<String>,
}

impl InMemoryProductSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load products from a JSON array of product documents.
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let products: Vec<ProductDetails> = serde_json::from_str(json)?;
        Ok(products.into_iter().fold(Self::new(), Self::with_product))
    }

    /// Add a product (builder style).
    pub fn with_product(mut self, product: ProductDetails) -> Self {
        self.insert(product);
        self
    }

    /// Add or replace a product.
    pub fn insert(&mut self, product: ProductDetails) {
        self.products.insert(product.id.as_str().to_string(), product);
    }

    /// Make every request fail with the given reason.
    pub fn unavailable(mut self, reason: impl Into<String>) -> Self {
        self.unavailable = Some(reason.into());
        self
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductSource for InMemoryProductSource {
    async fn product_details(&self, id: &GlobalId) -> Result<ProductQueryResponse, FetchError> {
        if let Some(reason) = &self.unavailable {
            return Err(FetchError::Request(reason.clone()));
        }

        Ok(match self.products.get(&id.encode()) {
            Some(product) => ProductQueryResponse::found(product.clone()),
            None => ProductQueryResponse::not_found(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Fetched;

    fn tee() -> ProductDetails {
        let mut product = ProductDetails::new(GlobalId::product("1").unwrap().to_product_id());
        product.name = Some("Tee".to_string());
        product
    }

    #[tokio::test]
    async fn test_known_product_is_found() {
        let source = InMemoryProductSource::new().with_product(tee());
        let id = GlobalId::product("1").unwrap();

        let fetched = source.product_details(&id).await.unwrap().into_fetched();
        assert_eq!(fetched.as_present().unwrap().name.as_deref(), Some("Tee"));
    }

    #[tokio::test]
    async fn test_unknown_product_is_missing() {
        let source = InMemoryProductSource::new().with_product(tee());
        let id = GlobalId::product("2").unwrap();

        let fetched = source.product_details(&id).await.unwrap().into_fetched();
        assert!(fetched.is_missing());
    }

    #[tokio::test]
    async fn test_unavailable_source_errors() {
        let source = InMemoryProductSource::new().with_product(tee()).unavailable("offline");
        let id = GlobalId::product("1").unwrap();

        let fetched: Fetched<ProductDetails> = source.product_details(&id).await.into();
        assert!(matches!(fetched, Fetched::Failed(_)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"id": "UHJvZHVjdDox", "name": "Tee"}, {"id": "UHJvZHVjdDoy"}]"#;
        let source = InMemoryProductSource::from_json(json).unwrap();
        assert_eq!(source.len(), 2);
    }
}
