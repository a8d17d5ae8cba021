//! Product Detail Page - page core workload.
//!
//! Turns a route product id and a page URL into what the page renders:
//! - Display gate and page branch (product, not found, offline, pending)
//! - Page metadata and head tags for link previews
//! - Query attribute selection, reconciled once per variant set and cleared
//!   from the URL after commit
//! - Navigation sessions that drop superseded fetches
//!
//! # Example
//!
//! ```rust
//! use product_details::prelude::*;
//!
//! # async fn run() -> Result<(), PageError> {
//! let source = InMemoryProductSource::new();
//! let url = PageUrl::parse("https://shop.example.com/product/72?color=Red")?;
//! let mut view = ProductView::new(source, StaticNetworkStatus::online(), url, MemoryCart::new());
//!
//! let outcome = view.load("72").await?;
//! assert_eq!(outcome.branch(), PageBranch::NotFound);
//! # Ok(())
//! # }
//! ```

pub mod collaborators;
pub mod config;
pub mod data;
pub mod error;
pub mod gate;
pub mod head;
pub mod meta;
pub mod selection;
pub mod telemetry;
pub mod view;

pub use config::PageConfig;
pub use error::{FetchError, PageError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::collaborators::{
        Cart, CartLine, Location, MemoryCart, NetworkStatus, PageUrl, SearchQueryAttributes,
        StaticNetworkStatus,
    };
    pub use crate::config::{LogFormat, MetaConfig, PageConfig, TelemetryConfig};
    pub use crate::data::{Fetched, InMemoryProductSource, ProductQueryResponse, ProductSource};
    pub use crate::error::{FetchError, PageError};
    pub use crate::gate::{can_display, DisplayableProduct, PageBranch};
    pub use crate::head::HeadTags;
    pub use crate::meta::{extract_meta, MetaProperty, MetadataRecord};
    pub use crate::selection::AttributeSelection;
    pub use crate::view::{FetchTicket, PageOutcome, ProductPage, ProductView};
}
