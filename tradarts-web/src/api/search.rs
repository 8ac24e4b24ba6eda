//! Site-wide search

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tradarts_common::search::{search_catalog, SearchHit};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
}

/// GET /api/search?q=...
///
/// Instruments, tutorials and songs, in that order, at most eight. Queries
/// under two characters return an empty list.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let results = search_catalog(state.catalog, &query.q);
    debug!("Search '{}' matched {} records", query.q, results.len());

    Json(SearchResponse {
        query: query.q,
        results,
    })
}
