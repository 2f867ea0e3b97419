//! src/model/listing.rs
//! ============================================================================
//! # Listing and Query Types
//!
//! Immutable catalog records plus the small value types that drive the
//! filter/search/sort pipeline: the query descriptor, the derived category
//! summaries, the persisted subset and the detail-overlay selection.

use std::{fmt, str::FromStr, sync::Arc};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "Todas";

/// One service offering in the catalog. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: CompactString,
    /// Price in BRL.
    pub price: f64,
    /// 0.0 to 5.0, one decimal place.
    pub rating: f32,
    #[serde(rename = "reviews")]
    pub review_count: u32,
    pub location: CompactString,
    #[serde(rename = "image")]
    pub image_ref: String,
    #[serde(rename = "alt", default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// 0 to 100.
    #[serde(rename = "popularity")]
    pub popularity_score: u8,
}

impl Listing {
    /// Accessibility text for the image, falling back to the listing name.
    #[must_use]
    pub fn alt_or_name(&self) -> &str {
        self.alt_text.as_deref().unwrap_or(&self.name)
    }
}

/// Shared handle used by the controller for results and selection.
pub type SharedListing = Arc<Listing>;

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "price-asc")]
    PriceAscending,
    #[serde(rename = "price-desc")]
    PriceDescending,
    #[default]
    #[serde(rename = "popularity")]
    PopularityDescending,
}

impl SortKey {
    pub const ALL: [Self; 3] = [
        Self::PopularityDescending,
        Self::PriceAscending,
        Self::PriceDescending,
    ];

    /// Wire name used in persisted state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAscending => "price-asc",
            Self::PriceDescending => "price-desc",
            Self::PopularityDescending => "popularity",
        }
    }

    /// Display label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAscending => "Preço ↑",
            Self::PriceDescending => "Preço ↓",
            Self::PopularityDescending => "Popularidade",
        }
    }

    /// Next key in selector order, wrapping around.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::PopularityDescending => Self::PriceAscending,
            Self::PriceAscending => Self::PriceDescending,
            Self::PriceDescending => Self::PopularityDescending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(Self::PriceAscending),
            "price-desc" => Ok(Self::PriceDescending),
            "popularity" => Ok(Self::PopularityDescending),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

/// Active category, raw search text and sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub category: String,
    pub search_text: String,
    pub sort_key: SortKey,
}

impl QueryDescriptor {
    #[must_use]
    pub fn new(category: impl Into<String>, search_text: impl Into<String>, sort_key: SortKey) -> Self {
        Self {
            category: category.into(),
            search_text: search_text.into(),
            sort_key,
        }
    }

    #[must_use]
    pub fn is_category_filtered(&self) -> bool {
        self.category != ALL_CATEGORIES
    }

    /// Trimmed search text; empty means no search filter.
    #[must_use]
    pub fn search_needle(&self) -> &str {
        self.search_text.trim()
    }
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        Self::new(ALL_CATEGORIES, "", SortKey::default())
    }
}

/// Derived per-category count. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: CompactString,
    pub count: usize,
}

/// Part of the descriptor written to durable storage. Search text is not
/// part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistedSubset {
    #[serde(rename = "activeCategory")]
    pub category: String,
    #[serde(rename = "sortBy")]
    pub sort_key: SortKey,
}

impl From<&QueryDescriptor> for PersistedSubset {
    fn from(descriptor: &QueryDescriptor) -> Self {
        Self {
            category: descriptor.category.clone(),
            sort_key: descriptor.sort_key,
        }
    }
}

/// Detail overlay state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected: Option<SharedListing>,
    pub is_detail_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_wire_names_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
        assert!("relevance".parse::<SortKey>().is_err());
    }

    #[test]
    fn sort_key_cycle_visits_every_key() {
        let mut key = SortKey::default();
        let mut seen = vec![key];
        for _ in 0..2 {
            key = key.cycle();
            seen.push(key);
        }
        assert_eq!(seen, SortKey::ALL.to_vec());
        assert_eq!(key.cycle(), SortKey::PopularityDescending);
    }

    #[test]
    fn persisted_subset_uses_storage_field_names() {
        let descriptor = QueryDescriptor::new("Pets", "dog", SortKey::PriceAscending);
        let json = serde_json::to_string(&PersistedSubset::from(&descriptor)).unwrap();
        assert_eq!(json, r#"{"activeCategory":"Pets","sortBy":"price-asc"}"#);
    }

    #[test]
    fn persisted_subset_rejects_foreign_shapes() {
        assert!(serde_json::from_str::<PersistedSubset>(r#"{"activeCategory":"Pets"}"#).is_err());
        assert!(
            serde_json::from_str::<PersistedSubset>(
                r#"{"activeCategory":"Pets","sortBy":"rating"}"#
            )
            .is_err()
        );
        assert!(
            serde_json::from_str::<PersistedSubset>(
                r#"{"activeCategory":"Pets","sortBy":"popularity","searchTerm":"dog"}"#
            )
            .is_err()
        );
    }

    #[test]
    fn descriptor_needle_is_trimmed() {
        let descriptor = QueryDescriptor::new(ALL_CATEGORIES, "  dog \t", SortKey::default());
        assert_eq!(descriptor.search_needle(), "dog");
        assert!(!descriptor.is_category_filtered());
    }
}
