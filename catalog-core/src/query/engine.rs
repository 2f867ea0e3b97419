//! src/query/engine.rs
//! ============================================================================
//! # Query Engine: Pure Filter / Search / Sort over Listings
//!
//! Stateless functions over a listing slice. They accept anything that
//! borrows as a [`Listing`] (owned records or `Arc<Listing>` handles) and
//! hand back the same handle type, so callers decide how much to clone.
//!
//! None of these functions can fail: an unknown category, an empty search or
//! an empty catalog simply produce an empty or unfiltered result.

use std::{borrow::Borrow, cmp::Ordering};

use compact_str::CompactString;
use indexmap::IndexMap;

use crate::model::listing::{ALL_CATEGORIES, CategorySummary, Listing, QueryDescriptor, SortKey};

/// Groups listings by category, in order of first occurrence.
pub fn count_by_category<L: Borrow<Listing>>(listings: &[L]) -> Vec<CategorySummary> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for listing in listings {
        *counts.entry(listing.borrow().category.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(name, count)| CategorySummary {
            name: CompactString::from(name),
            count,
        })
        .collect()
}

/// Case-insensitive substring match on name or description.
fn contains_lowercased(listing: &Listing, needle: &str) -> bool {
    listing.name.to_lowercase().contains(needle)
        || listing.description.to_lowercase().contains(needle)
}

/// Listings whose name or description contains the (trimmed) search text.
pub fn narrow_by_search<L: Borrow<Listing> + Clone>(listings: &[L], search_text: &str) -> Vec<L> {
    let needle = search_text.trim();
    if needle.is_empty() {
        return listings.to_vec();
    }
    let needle = needle.to_lowercase();
    listings
        .iter()
        .filter(|listing| contains_lowercased((*listing).borrow(), &needle))
        .cloned()
        .collect()
}

/// Category filter, then search filter, then a stable sort by `sort_key`.
pub fn apply_query<L: Borrow<Listing> + Clone>(listings: &[L], descriptor: &QueryDescriptor) -> Vec<L> {
    let mut retained: Vec<L> = if descriptor.category == ALL_CATEGORIES {
        listings.to_vec()
    } else {
        listings
            .iter()
            .filter(|listing| (*listing).borrow().category == descriptor.category.as_str())
            .cloned()
            .collect()
    };

    if !descriptor.search_needle().is_empty() {
        retained = narrow_by_search(&retained, descriptor.search_needle());
    }

    sort_listings(&mut retained, descriptor.sort_key);
    retained
}

/// Stable in-place sort; equal keys keep their input order.
pub fn sort_listings<L: Borrow<Listing>>(listings: &mut [L], sort_key: SortKey) {
    listings.sort_by(|a, b| compare(a.borrow(), b.borrow(), sort_key));
}

fn compare(a: &Listing, b: &Listing, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::PriceAscending => a.price.total_cmp(&b.price),
        SortKey::PriceDescending => b.price.total_cmp(&a.price),
        SortKey::PopularityDescending => b.popularity_score.cmp(&a.popularity_score),
    }
}
