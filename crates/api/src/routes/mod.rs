//! HTTP routes

pub mod subscriptions;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Build the application router.
///
/// CORS preflight (`OPTIONS`) is answered by the `CorsLayer` applied in
/// `main`, so subscription intake is the only handler here.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/subscriptions", post(subscriptions::create_subscription))
        .with_state(state)
}
