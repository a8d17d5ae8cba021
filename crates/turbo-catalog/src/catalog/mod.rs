//! Product catalog module.
//!
//! Contains the product details aggregate as returned by the catalog API,
//! its variants and their attribute assignments.

mod category;
mod pricing;
mod product;
mod variant;

pub use category::{Category, Image};
pub use pricing::{PriceRange, ProductPricing};
pub use product::ProductDetails;
pub use variant::{Attribute, AttributeValue, ProductVariant, SelectedAttribute};
