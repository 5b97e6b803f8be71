// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

use axum::{routing::get, Router};

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use handlers::{categories, health};
pub use state::AppState;

/// Builds the application router
///
/// Transport layers (tracing, CORS) are added by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Category routes
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/api/categories/count", get(categories::count_categories))
        .route(
            "/api/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        // Shared state
        .with_state(state)
}
