use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use super::{json, limit, ApiErr, ApiResp, Ctx, Result};
use crate::models::{SearchQuery, SearchResults, SuggestQuery};

/// Suggestions for the text typed so far. Blank input yields an empty list.
pub async fn suggest(
    State(ctx): State<Arc<Ctx>>,
    Query(query): Query<SuggestQuery>,
) -> Result<ApiResp<Vec<String>>> {
    let text = query.query.trim();
    if text.is_empty() {
        return Ok(json(Vec::new()));
    }

    let n = limit(
        query.limit,
        ctx.consts.num_suggestions,
        ctx.consts.max_suggestions,
    );
    Ok(json(ctx.index.suggest_queries(text, n)))
}

/// Search books by title, author or tag substring.
pub async fn search(
    State(ctx): State<Arc<Ctx>>,
    Query(query): Query<SearchQuery>,
) -> Result<ApiResp<SearchResults>> {
    let q = query.query.trim();
    if q.is_empty() {
        return Err(ApiErr::new("query is required", StatusCode::BAD_REQUEST));
    }

    let n = limit(query.limit, ctx.consts.max_results, ctx.consts.max_results);
    let books = ctx.index.search(q, n);

    // An empty result is still a successful query; flag it for the client.
    let message = if books.is_empty() {
        Some(format!("no results found for '{}'", q))
    } else {
        None
    };

    Ok(ApiResp {
        message,
        data: Some(SearchResults {
            query: q.to_string(),
            total: books.len(),
            books,
        }),
    })
}
