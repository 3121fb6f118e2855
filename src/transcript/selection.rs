// SPDX-License-Identifier: MPL-2.0
//! User-curated set of selected sentence ids.

use std::collections::HashSet;

use super::ProcessingResult;

/// The set of sentence ids the user has marked for highlight playback.
///
/// Seeded from the document's suggested highlights when a processing result
/// arrives and mutated only through [`SelectedSet::toggle`] afterwards.
/// Membership is by sentence id, so the set stays valid across re-renders
/// of the same document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedSet {
    ids: HashSet<String>,
}

impl SelectedSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the initial selection for a freshly received document.
    ///
    /// Every sentence flagged as a suggested highlight starts out selected.
    /// Called once per document; later uploads build a new set rather than
    /// re-seeding this one.
    #[must_use]
    pub fn from_suggestions(document: &ProcessingResult) -> Self {
        let ids = document
            .sentences()
            .filter(|s| s.is_suggested_highlight)
            .map(|s| s.id.clone())
            .collect();
        Self { ids }
    }

    /// Flips membership of `id` and returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Returns true if the sentence with `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Removes every selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
