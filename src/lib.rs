pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_utils;

use axum::Router;
use config::AppState;

/// Router with every route, fallback and layer attached, ready to serve.
pub fn build_app(state: AppState) -> Router {
    routes::create_routes().with_state(state)
}
