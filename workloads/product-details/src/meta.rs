//! Page metadata for link previews and search engines.

use serde::{Deserialize, Serialize};

use crate::collaborators::Location;
use crate::config::MetaConfig;
use crate::gate::DisplayableProduct;

pub const PRICE_AMOUNT: &str = "product:price:amount";
pub const PRICE_CURRENCY: &str = "product:price:currency";
pub const IS_AVAILABLE: &str = "product:isAvailable";
pub const CATEGORY: &str = "product:category";

/// A custom `property`/`content` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaProperty {
    pub property: String,
    pub content: String,
}

impl MetaProperty {
    pub fn new(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            content: content.into(),
        }
    }
}

/// Metadata of a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub custom: Vec<MetaProperty>,
    pub description: String,
    pub image: Option<String>,
    pub title: String,
    /// Content-type tag.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl MetadataRecord {
    /// Content of a custom property.
    pub fn property(&self, property: &str) -> Option<&str> {
        self.custom
            .iter()
            .find(|p| p.property == property)
            .map(|p| p.content.as_str())
    }
}

/// Extract the page metadata of a displayable product.
///
/// Custom properties come in a fixed order: price amount, price currency,
/// availability, category. A property whose source value is absent is left
/// out. SEO title and description win over the product's own when
/// non-empty.
pub fn extract_meta(
    product: &DisplayableProduct<'_>,
    location: &dyn Location,
    config: &MetaConfig,
) -> MetadataRecord {
    let details = product.product();
    let mut custom = Vec::with_capacity(4);

    if let Some(price) = product.pricing().start_gross() {
        custom.push(MetaProperty::new(PRICE_AMOUNT, price.amount_string()));
        custom.push(MetaProperty::new(PRICE_CURRENCY, &price.currency));
    }

    let availability = if details.is_available {
        &config.in_stock_label
    } else {
        &config.out_of_stock_label
    };
    custom.push(MetaProperty::new(IS_AVAILABLE, availability));

    if let Some(category) = &details.category {
        custom.push(MetaProperty::new(CATEGORY, &category.name));
    }

    MetadataRecord {
        custom,
        description: non_empty(details.seo_description.as_deref())
            .unwrap_or(product.description())
            .to_string(),
        image: details.thumbnail.as_ref().map(|image| image.url.clone()),
        title: non_empty(details.seo_title.as_deref())
            .unwrap_or(product.name())
            .to_string(),
        kind: config.content_type.clone(),
        url: location.href(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
