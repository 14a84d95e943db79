pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/campaigns/:id/matches",
            get(handlers::handle_campaign_matches),
        )
        .route(
            "/api/v1/creators/:id/matches",
            get(handlers::handle_creator_matches),
        )
        .route("/api/v1/matches/score", post(handlers::handle_score))
        .with_state(state)
}
