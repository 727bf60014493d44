/// Shared application state
use crate::services::subscriptions::SubscriptionService;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub subscriptions: Arc<SubscriptionService>,
}

impl AppState {
    pub fn new(subscriptions: Arc<SubscriptionService>) -> Self {
        Self { subscriptions }
    }
}
