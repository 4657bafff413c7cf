//! Category provider contract and category merging.
//!
//! # Invariants
//! - Providers run in ascending priority; equal priorities keep registration order.
//! - The merged sequence is stable-sorted by `sort_weight` ascending.
//! - Merging never deduplicates; `dedupe_by_id` keeps the first occurrence.

use crate::extension::list::Registered;
use crate::extension::Extension;
use crate::model::category::Category;
use log::debug;
use std::collections::HashSet;

/// Pluggable source of zero or more categories.
pub trait CategoryProvider: Extension {
    /// Categories contributed by this provider. `None` means no contribution.
    fn categories(&self) -> Option<Vec<Category>>;
}

/// Collects every provider's categories and orders them by sort weight.
pub fn merge_categories(providers: &[Registered<dyn CategoryProvider>]) -> Vec<Category> {
    let mut ordered: Vec<&Registered<dyn CategoryProvider>> = providers.iter().collect();
    ordered.sort_by_key(|entry| entry.ordinal);

    let mut merged = Vec::new();
    for entry in ordered {
        let contributed = entry.extension.categories().unwrap_or_default();
        debug!(
            "event=categories_collected module=category provider_id={} priority={} count={}",
            entry.extension.id(),
            entry.ordinal,
            contributed.len()
        );
        merged.extend(contributed);
    }
    merged.sort_by_key(Category::sort_weight);
    merged
}

/// Drops every category whose id was already seen earlier in `categories`.
pub fn dedupe_by_id(categories: Vec<Category>) -> Vec<Category> {
    let mut seen = HashSet::new();
    categories
        .into_iter()
        .filter(|category| seen.insert(category.id().to_string()))
        .collect()
}
