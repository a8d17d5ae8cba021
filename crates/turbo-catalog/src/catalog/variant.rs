//! Variants and their attribute assignments.

use crate::ids::{AttributeId, AttributeSlug, VariantId};
use serde::{Deserialize, Serialize};

/// An attribute definition as referenced from a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Opaque attribute id.
    pub id: AttributeId,
    /// URL-safe slug (used in query strings).
    pub slug: AttributeSlug,
    /// Display name (e.g. "Color").
    #[serde(default)]
    pub name: Option<String>,
}

/// One value of an attribute (e.g. "Red").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Value compared against query strings.
    pub value: String,
    /// Display name, when it differs from the value.
    #[serde(default)]
    pub name: Option<String>,
}

impl AttributeValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: None,
        }
    }
}

/// The attribute values a variant carries for one attribute.
///
/// Values are ordered; the first one is the canonical value of the
/// assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedAttribute {
    pub attribute: Attribute,
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

impl SelectedAttribute {
    /// Create an assignment from an id, a slug and plain values.
    pub fn new<I, V>(id: impl Into<AttributeId>, slug: impl Into<AttributeSlug>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            attribute: Attribute {
                id: id.into(),
                slug: slug.into(),
                name: None,
            },
            values: values.into_iter().map(AttributeValue::new).collect(),
        }
    }

    pub fn id(&self) -> &AttributeId {
        &self.attribute.id
    }

    pub fn slug(&self) -> &AttributeSlug {
        &self.attribute.slug
    }

    /// The first value, if any.
    pub fn canonical_value(&self) -> Option<&str> {
        self.values.first().map(|v| v.value.as_str())
    }

    /// Whether any value equals `value`.
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.value == value)
    }
}

/// A purchasable configuration of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: VariantId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub quantity_available: Option<i64>,
    /// One assignment per attribute the variant is differentiated by.
    #[serde(default)]
    pub attributes: Vec<SelectedAttribute>,
}

impl ProductVariant {
    /// Create a variant without attributes.
    pub fn new(id: impl Into<VariantId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            sku: None,
            quantity_available: None,
            attributes: Vec::new(),
        }
    }

    /// Add an attribute assignment.
    pub fn with_attribute(mut self, attribute: SelectedAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Assignment for the given attribute id.
    pub fn attribute(&self, id: &AttributeId) -> Option<&SelectedAttribute> {
        self.attributes.iter().find(|a| a.id() == id)
    }

    /// Build the variant name from canonical values (e.g. "Red / M").
    pub fn build_name(&self) -> String {
        let parts: Vec<&str> = self
            .attributes
            .iter()
            .filter_map(SelectedAttribute::canonical_value)
            .collect();
        if parts.is_empty() {
            "Default".to_string()
        } else {
            parts.join(" / ")
        }
    }
}
