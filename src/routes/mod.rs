use crate::config::AppState;
use crate::handlers::application_handler::not_found_handler;
use crate::middleware::cors::with_cors;
use axum::extract::DefaultBodyLimit;
use axum::Router;

pub mod application_route;

pub fn create_routes() -> Router<AppState> {
    let router = Router::new()
        .merge(application_route::application_routes())
        .fallback(not_found_handler)
        // adImage is streamed and only its first 10MB kept, so oversize images still get their 413
        .layer(DefaultBodyLimit::disable());

    with_cors(router)
}
