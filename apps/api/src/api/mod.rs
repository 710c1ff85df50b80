// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};

pub use state::AppState;

/// Builds the application router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Team routes
        .route(
            "/api/teams",
            get(handlers::teams::list_teams).post(handlers::teams::create_team),
        )
        .route("/api/teams/:id/pairs", post(handlers::teams::form_pair))
        .with_state(state)
}
