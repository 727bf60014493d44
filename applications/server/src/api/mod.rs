/// API route handlers
pub mod health;
pub mod subscriptions;

use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/subscriptions", post(subscriptions::create_subscription))
        .route("/subscriptions", get(subscriptions::list_subscriptions))
        .route("/subscriptions/sum", get(subscriptions::sum_subscriptions))
        .route("/subscriptions/:id", get(subscriptions::get_subscription))
        .route("/subscriptions/:id", put(subscriptions::update_subscription))
        .route(
            "/subscriptions/:id",
            delete(subscriptions::delete_subscription),
        )
        .with_state(state)
}
