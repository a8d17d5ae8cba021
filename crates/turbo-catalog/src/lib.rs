//! Product catalog types and variant attribute reconciliation for TurboCommerce.
//!
//! This crate provides the data side of a product detail page:
//!
//! - **Catalog**: product details, variants, attribute assignments, pricing
//! - **Global ids**: translation between route ids and opaque API ids
//! - **Selection**: query-string attributes and their reconciliation into an
//!   attribute-id keyed selection for the variant picker
//!
//! # Example
//!
//! ```rust
//! use turbo_catalog::prelude::*;
//!
//! let variants = vec![
//!     ProductVariant::new("v-red")
//!         .with_attribute(SelectedAttribute::new("attr-color", "color", ["Red", "Blue"])),
//! ];
//!
//! let query = QueryAttributes::parse("?color=Red");
//! let selection = reconcile(&query, &variants);
//!
//! assert_eq!(selection.get(&AttributeId::new("attr-color")), Some("Red"));
//! ```

pub mod error;
pub mod global_id;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod selection;

pub use error::CatalogError;
pub use global_id::GlobalId;
pub use ids::*;
pub use money::{Money, TaxedMoney};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::global_id::GlobalId;
    pub use crate::ids::*;
    pub use crate::money::{Money, TaxedMoney};

    // Catalog
    pub use crate::catalog::{
        Attribute, AttributeValue, Category, Image, PriceRange, ProductDetails, ProductPricing,
        ProductVariant, SelectedAttribute,
    };

    // Selection
    pub use crate::selection::{reconcile, QueryAttributes, SelectionMap};
}
