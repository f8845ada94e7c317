//! Query processing over an in-memory catalog.
//!
//! The pipeline always runs in the same order: filter by category, free-text
//! search, sort, then paginate (see [`crate::pagination`]). Every step is a
//! pure function over an owned `Vec<Pokemon>`.

use crate::{paginate, Page, Pokemon};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction for ordering by Pokédex number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses a wire value, falling back to ascending for anything unknown.
    #[must_use]
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Keeps records whose primary or secondary type equals `category`,
/// ignoring case. An empty or absent category returns the input unchanged.
#[must_use]
pub fn filter_by_category(records: Vec<Pokemon>, category: Option<&str>) -> Vec<Pokemon> {
    let Some(category) = category.filter(|c| !c.is_empty()) else {
        return records;
    };
    let wanted = category.to_lowercase();

    records
        .into_iter()
        .filter(|p| {
            [p.type_one.as_deref(), p.type_two.as_deref()]
                .into_iter()
                .flatten()
                .any(|t| t.to_lowercase() == wanted)
        })
        .collect()
}

/// Case-insensitive substring search across name, both types, number and
/// generation. An empty or absent query returns the input unchanged.
#[must_use]
pub fn search(records: Vec<Pokemon>, query: Option<&str>) -> Vec<Pokemon> {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return records;
    };
    let needle = query.to_lowercase();

    records.into_iter().filter(|p| matches_search(p, &needle)).collect()
}

fn matches_search(pokemon: &Pokemon, needle: &str) -> bool {
    let contains = |haystack: Option<&str>| {
        haystack.is_some_and(|h| h.to_lowercase().contains(needle))
    };

    contains(Some(&pokemon.name))
        || contains(pokemon.type_one.as_deref())
        || contains(pokemon.type_two.as_deref())
        || pokemon.number.to_string().contains(needle)
        || pokemon.generation_label().to_lowercase().contains(needle)
}

/// Stable sort by number. Descending order is the reversed ascending order.
#[must_use]
pub fn sort(mut records: Vec<Pokemon>, direction: SortDirection) -> Vec<Pokemon> {
    records.sort_by_key(|p| p.number);
    if direction == SortDirection::Desc {
        records.reverse();
    }
    records
}

/// A normalised catalog listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub page: i64,
    pub page_size: usize,
    pub sort: SortDirection,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl CatalogQuery {
    /// Page sizes a client may ask for.
    pub const ALLOWED_PAGE_SIZES: [usize; 3] = [5, 10, 20];
    /// Page size used when the requested one is not allowed.
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Builds a query, replacing a disallowed page size with the default.
    #[must_use]
    pub fn new(page: i64, page_size: i64, sort: SortDirection) -> Self {
        Self {
            page,
            page_size: Self::normalize_page_size(page_size),
            sort,
            category: None,
            search: None,
        }
    }

    /// Restricts the listing to one category.
    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Adds a free-text search term.
    #[must_use]
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search;
        self
    }

    fn normalize_page_size(requested: i64) -> usize {
        usize::try_from(requested)
            .ok()
            .filter(|size| Self::ALLOWED_PAGE_SIZES.contains(size))
            .unwrap_or(Self::DEFAULT_PAGE_SIZE)
    }

    /// Runs the full pipeline over `records`.
    #[must_use]
    pub fn apply(&self, records: Vec<Pokemon>) -> Page<Pokemon> {
        let records = filter_by_category(records, self.category.as_deref());
        let records = search(records, self.search.as_deref());
        let records = sort(records, self.sort);
        paginate(records, self.page, self.page_size)
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PAGE_SIZE as i64, SortDirection::Asc)
    }
}
