use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use super::{json, ApiErr, ApiResp, Ctx, Result};
use crate::models::{Book, Stats};

/// Get a book by its ID.
pub async fn get_book(
    State(ctx): State<Arc<Ctx>>,
    Path(id): Path<String>,
) -> Result<ApiResp<Book>> {
    let book = ctx
        .index
        .get_by_id(&id)
        .cloned()
        .ok_or_else(|| ApiErr::new("book not found", StatusCode::NOT_FOUND))?;

    Ok(json(book))
}

/// Catalog and index counts.
pub async fn get_stats(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<Stats>> {
    Ok(json(ctx.index.stats()))
}
