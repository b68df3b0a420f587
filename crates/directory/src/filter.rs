//! Display-list derivation: name ordering + case-insensitive search.
//!
//! The display list is always computed from a snapshot, never stored next to
//! the records. Rules:
//!
//! 1. Sort by `name.to_lowercase()` ascending. The sort is stable, so records
//!    with equal lowercased names keep their snapshot order.
//! 2. An empty query returns the whole sorted list.
//! 3. Otherwise a record is kept when its lowercased name or lowercased phone
//!    number contains the lowercased query as a plain substring.
//!
//! Lowercasing is Unicode-aware and locale independent (`str::to_lowercase`).

use crate::model::Contact;
use crate::store::ContactStore;

/// Filter and order `records` for display. Pure; an empty result is valid.
pub fn filter(records: &[Contact], query: &str) -> Vec<Contact> {
    let mut keyed: Vec<(String, &Contact)> = records
        .iter()
        .map(|c| (c.name().to_lowercase(), c))
        .collect();
    // sort_by is stable
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    if query.is_empty() {
        return keyed.into_iter().map(|(_, c)| c.clone()).collect();
    }

    let needle = query.to_lowercase();
    keyed
        .into_iter()
        .filter(|(name, c)| {
            name.contains(&needle) || c.phone_number().to_lowercase().contains(&needle)
        })
        .map(|(_, c)| c.clone())
        .collect()
}

/// Memoizing front for [`filter`], keyed on `(store.version(), query)`.
///
/// Bound to a single store: versions of different stores are not comparable.
#[derive(Debug, Default)]
pub struct FilterEngine {
    key: Option<(u64, String)>,
    results: Vec<Contact>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the display list if the store or the query changed since the
    /// last call. Returns `true` when a recomputation happened.
    pub fn refresh(&mut self, store: &ContactStore, query: &str) -> bool {
        let fresh = matches!(
            &self.key,
            Some((version, cached)) if *version == store.version() && cached == query
        );
        if fresh {
            return false;
        }
        self.results = filter(&store.snapshot(), query);
        self.key = Some((store.version(), query.to_owned()));
        true
    }

    /// The last computed display list.
    pub fn results(&self) -> &[Contact] {
        &self.results
    }

    /// Drop the cached key so the next `refresh` recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
