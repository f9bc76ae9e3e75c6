use axum::{routing::post, Router};
use crate::config::AppState;
use crate::handlers::application_handler::{apply_handler, not_found_handler};

pub fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/api/apply", post(apply_handler).fallback(not_found_handler))
}
