//! Page URL access.

use turbo_catalog::selection::QueryAttributes;
use url::Url;

use crate::error::PageError;

/// Path prefix of product routes.
const PRODUCT_ROUTE: &str = "product";

/// Source of the query attributes of the current page.
pub trait SearchQueryAttributes {
    /// Desired attribute values encoded in the page URL.
    fn search_query_attributes(&self) -> QueryAttributes;

    /// Remove the query attributes from the URL.
    fn clear_url(&mut self);
}

/// Current page location.
pub trait Location {
    fn href(&self) -> String;
}

/// The page URL, held by the host and edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    url: Url,
    clears: usize,
}

impl PageUrl {
    pub fn new(url: Url) -> Self {
        Self { url, clears: 0 }
    }

    pub fn parse(input: &str) -> Result<Self, PageError> {
        Ok(Self::new(Url::parse(input)?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Number of times [`SearchQueryAttributes::clear_url`] ran.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Route product id: the segment after `/product/`.
    ///
    /// A trailing slash is ignored. Returns `None` for other routes.
    pub fn route_product_id(&self) -> Option<&str> {
        let mut segments = self.url.path_segments()?.filter(|s| !s.is_empty());
        match segments.next() {
            Some(PRODUCT_ROUTE) => segments.next(),
            _ => None,
        }
    }
}

impl SearchQueryAttributes for PageUrl {
    fn search_query_attributes(&self) -> QueryAttributes {
        QueryAttributes::from_url(&self.url)
    }

    fn clear_url(&mut self) {
        self.url.set_query(None);
        self.url.set_fragment(None);
        self.clears += 1;
    }
}

impl Location for PageUrl {
    fn href(&self) -> String {
        self.url.as_str().to_string()
    }
}
