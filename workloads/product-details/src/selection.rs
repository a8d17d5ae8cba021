//! Query attribute selection state of a mounted product page.
//!
//! Two stages run independently:
//!
//! 1. [`AttributeSelection::recompute`] reconciles the URL's query attributes
//!    against the variants, once per variants key.
//! 2. [`AttributeSelection::flush_url`] clears the URL whenever a new
//!    selection revision has not been flushed yet.
//!
//! A fresh state starts with an unflushed revision, so the first flush after
//! mount clears the URL even when nothing was selected.

use tracing::debug;
use turbo_catalog::catalog::ProductVariant;
use turbo_catalog::selection::{reconcile, SelectionMap};

use crate::collaborators::SearchQueryAttributes;

/// Identity of a variant sequence. Only the length is compared.
fn variants_key(variants: &[ProductVariant]) -> usize {
    variants.len()
}

/// Selection committed from the page's query attributes.
#[derive(Debug, Clone, Default)]
pub struct AttributeSelection {
    selection: SelectionMap,
    variants_key: Option<usize>,
    revision: u64,
    flushed: Option<u64>,
}

impl AttributeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed selection.
    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    /// Revision of the committed selection, bumped on every commit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the current revision still has to clear the URL.
    pub fn needs_flush(&self) -> bool {
        self.flushed != Some(self.revision)
    }

    /// Stage 1: reconcile when the variants key changed.
    ///
    /// An empty query leaves the committed selection untouched. Returns
    /// `true` when the query was reconciled and committed, even if the
    /// resulting map equals the previous one.
    pub fn recompute(
        &mut self,
        variants: &[ProductVariant],
        url: &dyn SearchQueryAttributes,
    ) -> bool {
        let key = variants_key(variants);
        if self.variants_key == Some(key) {
            return false;
        }
        self.variants_key = Some(key);

        let query = url.search_query_attributes();
        if query.is_empty() {
            debug!(variants = key, "No query attributes to reconcile");
            return false;
        }

        // Every consumed query is a new revision.
        self.selection = reconcile(&query, variants);
        self.revision += 1;
        debug!(
            revision = self.revision,
            attributes = self.selection.len(),
            "Committed attribute selection"
        );
        true
    }

    /// Stage 2: clear the URL once per selection revision.
    ///
    /// Returns `true` when the URL was cleared.
    pub fn flush_url(&mut self, url: &mut dyn SearchQueryAttributes) -> bool {
        if !self.needs_flush() {
            return false;
        }
        url.clear_url();
        self.flushed = Some(self.revision);
        debug!(revision = self.revision, "Cleared query attributes from URL");
        true
    }

    /// Run both stages in order.
    pub fn sync(&mut self, variants: &[ProductVariant], url: &mut dyn SearchQueryAttributes) {
        self.recompute(variants, url);
        self.flush_url(url);
    }
}
