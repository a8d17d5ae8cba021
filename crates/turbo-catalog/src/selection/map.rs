//! The id-keyed attribute selection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ProductVariant;
use crate::ids::AttributeId;

/// Selected value per attribute id.
///
/// Produced by [`reconcile`](super::reconcile) and consumed by the variant
/// picker. Entries are only ever added; an attribute keeps the first value
/// recorded for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionMap(BTreeMap<AttributeId, String>);

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value unless the attribute already has one.
    ///
    /// Returns `true` when the entry was added.
    pub fn insert_if_absent(&mut self, id: AttributeId, value: impl Into<String>) -> bool {
        if self.0.contains_key(&id) {
            return false;
        }
        self.0.insert(id, value.into());
        true
    }

    pub fn get(&self, id: &AttributeId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &AttributeId) -> bool {
        self.0.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttributeId, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Whether the variant carries every selected value.
    pub fn is_satisfied_by(&self, variant: &ProductVariant) -> bool {
        self.iter().all(|(id, value)| {
            variant
                .attribute(id)
                .map(|assignment| assignment.has_value(value))
                .unwrap_or(false)
        })
    }

    /// First variant carrying every selected value.
    ///
    /// An empty selection resolves to nothing rather than to the first
    /// variant, so the picker starts unselected.
    pub fn find_variant<'a>(&self, variants: &'a [ProductVariant]) -> Option<&'a ProductVariant> {
        if self.is_empty() {
            return None;
        }
        variants.iter().find(|v| self.is_satisfied_by(v))
    }
}

impl<K, V> FromIterator<(K, V)> for SelectionMap
where
    K: Into<AttributeId>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert_if_absent(k.into(), v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SelectedAttribute;

    fn variants() -> Vec<ProductVariant> {
        vec![
            ProductVariant::new("v-red-m")
                .with_attribute(SelectedAttribute::new("attr-color", "color", ["Red"]))
                .with_attribute(SelectedAttribute::new("attr-size", "size", ["M"])),
            ProductVariant::new("v-blue-l")
                .with_attribute(SelectedAttribute::new("attr-color", "color", ["Blue"]))
                .with_attribute(SelectedAttribute::new("attr-size", "size", ["L"])),
        ]
    }

    #[test]
    fn test_first_value_is_kept() {
        let mut map = SelectionMap::new();
        assert!(map.insert_if_absent(AttributeId::new("attr-color"), "Red"));
        assert!(!map.insert_if_absent(AttributeId::new("attr-color"), "Blue"));
        assert_eq!(map.get(&AttributeId::new("attr-color")), Some("Red"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_from_iter_keeps_first() {
        let map: SelectionMap = [("attr-size", "M"), ("attr-size", "L")].into_iter().collect();
        assert_eq!(map.get(&AttributeId::new("attr-size")), Some("M"));
    }

    #[test]
    fn test_find_variant() {
        let variants = variants();
        let map: SelectionMap = [("attr-color", "Blue"), ("attr-size", "L")].into_iter().collect();
        assert_eq!(map.find_variant(&variants).unwrap().id.as_str(), "v-blue-l");

        let partial: SelectionMap = [("attr-size", "M")].into_iter().collect();
        assert_eq!(partial.find_variant(&variants).unwrap().id.as_str(), "v-red-m");
    }

    #[test]
    fn test_find_variant_no_match() {
        let variants = variants();
        let mixed: SelectionMap = [("attr-color", "Red"), ("attr-size", "L")].into_iter().collect();
        assert!(mixed.find_variant(&variants).is_none());
        assert!(SelectionMap::new().find_variant(&variants).is_none());
    }

    #[test]
    fn test_serializes_as_object() {
        let map: SelectionMap = [("attr-color", "Red")].into_iter().collect();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"attr-color":"Red"}"#);
    }
}
