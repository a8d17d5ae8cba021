//! Opaque global identifiers.
//!
//! The catalog API addresses objects by a global id: the base64 encoding of
//! `"<Type>:<database id>"`. Routes carry the plain database id
//! (`/product/72`), so the page translates it before querying.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;

use crate::error::CatalogError;
use crate::ids::ProductId;

/// Type name used for product global ids.
pub const PRODUCT_TYPE: &str = "Product";

/// A decoded global id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobalId {
    type_name: String,
    db_id: String,
}

impl GlobalId {
    /// Build a global id from an object type and a database id.
    pub fn new(type_name: impl Into<String>, db_id: impl Into<String>) -> Result<Self, CatalogError> {
        let type_name = type_name.into();
        let db_id = db_id.into();

        if db_id.trim().is_empty() {
            return Err(CatalogError::InvalidId(db_id));
        }
        if type_name.is_empty() || type_name.contains(':') {
            return Err(CatalogError::InvalidId(type_name));
        }

        Ok(Self { type_name, db_id })
    }

    /// Shorthand for a product global id.
    pub fn product(db_id: impl Into<String>) -> Result<Self, CatalogError> {
        Self::new(PRODUCT_TYPE, db_id)
    }

    /// Decode an encoded global id.
    pub fn decode(encoded: &str) -> Result<Self, CatalogError> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| CatalogError::MalformedGlobalId(e.to_string()))?;
        let raw = String::from_utf8(bytes)
            .map_err(|e| CatalogError::MalformedGlobalId(e.to_string()))?;

        let (type_name, db_id) = raw
            .split_once(':')
            .ok_or_else(|| CatalogError::MalformedGlobalId(raw.clone()))?;

        Self::new(type_name, db_id)
    }

    /// Decode and check the object type.
    pub fn decode_as(encoded: &str, expected: &str) -> Result<Self, CatalogError> {
        let id = Self::decode(encoded)?;
        if id.type_name != expected {
            return Err(CatalogError::GlobalIdTypeMismatch {
                expected: expected.to_string(),
                got: id.type_name,
            });
        }
        Ok(id)
    }

    /// Object type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Database id.
    pub fn db_id(&self) -> &str {
        &self.db_id
    }

    /// Encode to the opaque string form.
    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.type_name, self.db_id))
    }

    /// Encoded form as a [`ProductId`].
    pub fn to_product_id(&self) -> ProductId {
        ProductId::new(self.encode())
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
