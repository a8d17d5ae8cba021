//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different identifier kinds,
//! e.g., looking up a selection by an `AttributeSlug` where an `AttributeId`
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate string newtype identifiers.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Opaque product identifier as returned by the catalog API.
    ProductId
);
define_id!(
    /// Opaque variant identifier.
    VariantId
);
define_id!(
    /// Opaque category identifier.
    CategoryId
);
define_id!(
    /// Opaque identifier of an attribute definition (e.g. the "Color" attribute).
    AttributeId
);
define_id!(
    /// Human-readable, URL-safe name of an attribute definition (e.g. `color`).
    ///
    /// Within one product a slug denotes exactly one [`AttributeId`], but the
    /// mapping is only discoverable by scanning the product's variants.
    AttributeSlug
);
