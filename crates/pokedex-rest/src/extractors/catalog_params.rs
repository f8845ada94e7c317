//! Catalog listing query parameters.

use pokedex_core::{CatalogQuery, PokedexError, SortDirection};
use serde::Deserialize;
use utoipa::IntoParams;

const INVALID_PAGING: &str = "Invalid page or page_size parameter";

/// Raw query string of `GET /api/pokemon`.
///
/// Kept as strings so a non-integer `page` or `page_size` surfaces as a
/// 400 with a stable message instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogParams {
    /// 1-based page number, default 1.
    pub page: Option<String>,
    /// One of 5, 10 or 20; anything else falls back to 10.
    pub page_size: Option<String>,
    /// `asc` (default) or `desc`.
    pub sort: Option<String>,
    /// Category filter, matched against either type.
    #[serde(rename = "type")]
    pub category: Option<String>,
    /// Free-text search.
    pub search: Option<String>,
}

impl TryFrom<CatalogParams> for CatalogQuery {
    type Error = PokedexError;

    fn try_from(params: CatalogParams) -> Result<Self, Self::Error> {
        let page = parse_int(params.page.as_deref(), 1)?;
        let page_size = parse_int(params.page_size.as_deref(), CatalogQuery::DEFAULT_PAGE_SIZE as i64)?;
        let sort = SortDirection::parse_lenient(params.sort.as_deref());

        Ok(CatalogQuery::new(page, page_size, sort)
            .with_category(params.category)
            .with_search(params.search))
    }
}

fn parse_int(value: Option<&str>, default: i64) -> Result<i64, PokedexError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| PokedexError::validation(INVALID_PAGING)),
    }
}
