pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/resume/highlights",
            post(handlers::handle_resume_highlights),
        )
        .route("/resume/improvement", post(handlers::handle_improvement))
        .with_state(state)
}
