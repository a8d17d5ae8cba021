//! Query-string attributes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

use crate::ids::AttributeSlug;

/// Desired attribute values keyed by slug, e.g. `color=red&size=m`.
///
/// Built once per navigation from the page URL. Values are kept verbatim
/// (after percent-decoding); nothing is validated against the catalog here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryAttributes(BTreeMap<AttributeSlug, String>);

impl QueryAttributes {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a search string, with or without the leading `?`.
    ///
    /// Repeated keys keep their first value. Pairs with an empty key are
    /// dropped.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        Self::from_pairs(form_urlencoded::parse(search.as_bytes()))
    }

    /// Read the query of a URL.
    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs())
    }

    fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            if key.is_empty() {
                continue;
            }
            map.entry(AttributeSlug::new(key))
                .or_insert_with(|| value.as_ref().to_string());
        }
        Self(map)
    }

    /// Add a desired value (builder style).
    pub fn with(mut self, slug: impl Into<AttributeSlug>, value: impl Into<String>) -> Self {
        self.0.insert(slug.into(), value.into());
        self
    }

    /// Raw value for a slug.
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.0.get(slug).map(String::as_str)
    }

    /// Desired value for a slug; empty values count as absent.
    pub fn desired(&self, slug: &AttributeSlug) -> Option<&str> {
        self.get(slug.as_str()).filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttributeSlug, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryAttributes
where
    K: Into<AttributeSlug>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
