//! Query-string to variant-attribute reconciliation.

use tracing::debug;

use crate::catalog::ProductVariant;
use crate::selection::{QueryAttributes, SelectionMap};

/// Translate slug-keyed query attributes into an id-keyed selection.
///
/// Variants and their assignments are walked in catalog order. A desired
/// value found on an assignment is recorded under the assignment's attribute
/// id when either
///
/// - nothing has been recorded yet (the first match anchors the selection), or
/// - the current variant has an assignment whose attribute is already
///   recorded with that assignment's canonical (first) value.
///
/// An attribute keeps the first value recorded for it. Slugs that match no
/// assignment are ignored and empty desired values are treated as absent.
/// The function performs no I/O and leaves both inputs untouched.
pub fn reconcile(query: &QueryAttributes, variants: &[ProductVariant]) -> SelectionMap {
    let mut selection = SelectionMap::new();
    if query.is_empty() || variants.is_empty() {
        return selection;
    }

    for (index, variant) in variants.iter().enumerate() {
        for assignment in &variant.attributes {
            let Some(desired) = query.desired(assignment.slug()) else {
                continue;
            };
            if selection.contains(assignment.id()) || !assignment.has_value(desired) {
                continue;
            }

            if selection.is_empty() || is_consistent(&selection, variant) {
                debug!(
                    attribute = %assignment.id(),
                    value = desired,
                    variant = index,
                    "selected query attribute"
                );
                selection.insert_if_absent(assignment.id().clone(), desired);
            }
        }
    }

    debug!(
        requested = query.len(),
        selected = selection.len(),
        "reconciled query attributes"
    );
    selection
}

/// Whether the variant carries an already-recorded attribute at its
/// canonical value.
fn is_consistent(selection: &SelectionMap, variant: &ProductVariant) -> bool {
    variant.attributes.iter().any(|assignment| {
        match (selection.get(assignment.id()), assignment.canonical_value()) {
            (Some(recorded), Some(canonical)) => recorded == canonical,
            _ => false,
        }
    })
}
