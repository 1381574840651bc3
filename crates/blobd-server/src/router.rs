use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all blobd endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/data/:repository", put(handler::put_object))
        .route(
            "/data/:repository/:oid",
            get(handler::get_object).delete(handler::delete_object),
        )
        .fallback(handler::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
