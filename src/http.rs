use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::{books, search, Ctx};

/// Initialize HTTP routes.
pub fn init_handlers(ctx: Arc<Ctx>) -> Router {
    Router::new()
        .route("/api/suggest", get(search::suggest))
        .route("/api/search", get(search::search))
        .route("/api/books/{id}", get(books::get_book))
        .route("/api/stats", get(books::get_stats))
        .with_state(ctx)
}

/// Bind `addr` and serve the API until the process exits.
pub async fn serve(ctx: Arc<Ctx>, addr: &str) -> Result<(), std::io::Error> {
    let routes = init_handlers(ctx);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("starting server on {}", addr);

    axum::serve(listener, routes).await
}
