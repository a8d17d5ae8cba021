//! The product details aggregate.

use crate::catalog::{Category, Image, ProductPricing, ProductVariant};
use crate::error::CatalogError;
use crate::ids::ProductId;
use serde::{Deserialize, Deserializer, Serialize};

/// A product as loaded for its detail page.
///
/// Every field except `id` may be missing: the data source keeps partial
/// data when part of a query fails, so a half-loaded product must still
/// deserialize. Whether it can be shown is decided by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub id: ProductId,
    #[serde(default)]
    pub name: Option<String>,
    /// Rich-text description document, kept as its serialized JSON string.
    #[serde(default, rename = "descriptionJson")]
    pub description: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_available: bool,
    #[serde(default)]
    pub pricing: Option<ProductPricing>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub thumbnail: Option<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default)]
    pub variants: Option<Vec<ProductVariant>>,
}

impl ProductDetails {
    /// Create an empty product shell with only an id.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            seo_title: None,
            seo_description: None,
            is_available: false,
            pricing: None,
            category: None,
            thumbnail: None,
            images: Vec::new(),
            variants: None,
        }
    }

    /// Parse from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Variants, or an empty slice when none were loaded.
    pub fn variants_or_empty(&self) -> &[ProductVariant] {
        self.variants.as_deref().unwrap_or(&[])
    }

    /// Look up a variant by id.
    pub fn variant(&self, id: &crate::ids::VariantId) -> Option<&ProductVariant> {
        self.variants_or_empty().iter().find(|v| &v.id == id)
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
