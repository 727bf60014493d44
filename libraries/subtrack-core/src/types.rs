//! Subscription domain types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored subscription record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Subscription {
    /// Unique identifier, generated by the storage layer on creation
    pub id: Uuid,

    /// Name of the subscribed service
    pub service_name: String,

    /// Monthly price in the smallest currency denomination, always positive
    pub price: i64,

    /// Opaque identifier of the owning user
    pub user_id: String,

    /// First day of the month the subscription starts
    pub start_date: NaiveDate,

    /// First day of the month the subscription ends, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Creation timestamp, set by the storage layer
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp, refreshed by the storage layer
    pub updated_at: DateTime<Utc>,
}

/// A validated subscription ready to be inserted.
///
/// Dates are already parsed and normalized to the first of the month;
/// `id` and timestamps are assigned by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
    pub service_name: String,
    pub price: i64,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// A validated partial update.
///
/// Each field is independently present-or-absent; absent fields leave the
/// stored value unchanged. Clearing a set `end_date` is not expressible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionPatch {
    pub service_name: Option<String>,
    pub price: Option<i64>,
    pub user_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SubscriptionPatch {
    /// Overwrite the supplied fields on `subscription`, leaving the rest.
    pub fn apply_to(self, subscription: &mut Subscription) {
        if let Some(service_name) = self.service_name {
            subscription.service_name = service_name;
        }
        if let Some(price) = self.price {
            subscription.price = price;
        }
        if let Some(user_id) = self.user_id {
            subscription.user_id = user_id;
        }
        if let Some(start_date) = self.start_date {
            subscription.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            subscription.end_date = Some(end_date);
        }
    }
}
