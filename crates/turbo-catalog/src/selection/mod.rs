//! Attribute selection driven by the page query string.
//!
//! - [`QueryAttributes`]: slug-keyed desired values parsed from the URL
//! - [`SelectionMap`]: id-keyed selection feeding the variant picker
//! - [`reconcile`]: turns the former into the latter using the variant catalog

mod map;
mod query;
mod reconcile;

pub use map::SelectionMap;
pub use query::QueryAttributes;
pub use reconcile::reconcile;
