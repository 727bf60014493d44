/// Business logic services
pub mod subscriptions;

pub use subscriptions::SubscriptionService;
