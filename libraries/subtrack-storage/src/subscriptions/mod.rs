//! Subscription queries
//!
//! Every function issues exactly one parameterized statement. `update` and
//! `delete` are silent no-ops when the id matches no row; callers that need
//! to distinguish a miss fetch the row first with [`get_by_id`].

use crate::error::Result;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};
use subtrack_core::{NewSubscription, Subscription};
use uuid::Uuid;

/// Insert a new subscription row.
///
/// The database assigns `id`, `created_at` and `updated_at`; the fully
/// populated record is returned.
pub async fn create(pool: &PgPool, new: NewSubscription) -> Result<Subscription> {
    let subscription = sqlx::query_as::<_, Subscription>(
        "INSERT INTO subscriptions (service_name, price, user_id, start_date, end_date)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, service_name, price, user_id, start_date, end_date, created_at, updated_at",
    )
    .bind(&new.service_name)
    .bind(new.price)
    .bind(&new.user_id)
    .bind(new.start_date)
    .bind(new.end_date)
    .fetch_one(pool)
    .await?;

    Ok(subscription)
}

/// Fetch a subscription by id, or `None` when no row matches.
pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Subscription>> {
    let subscription = sqlx::query_as::<_, Subscription>(
        "SELECT id, service_name, price, user_id, start_date, end_date, created_at, updated_at
         FROM subscriptions
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(subscription)
}

/// Overwrite all mutable fields of the row matching `subscription.id`,
/// refreshing `updated_at`. No-op when the id matches no row.
pub async fn update(pool: &PgPool, subscription: &Subscription) -> Result<()> {
    sqlx::query(
        "UPDATE subscriptions
         SET service_name = $1, price = $2, user_id = $3,
             start_date = $4, end_date = $5, updated_at = now()
         WHERE id = $6",
    )
    .bind(&subscription.service_name)
    .bind(subscription.price)
    .bind(&subscription.user_id)
    .bind(subscription.start_date)
    .bind(subscription.end_date)
    .bind(subscription.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete the row matching `id`. No-op when the id matches no row.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM subscriptions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// All subscriptions for `user_id`, optionally narrowed to one service.
///
/// Ordering is storage order; the caller does not rely on it.
pub async fn list_for_user(
    pool: &PgPool,
    user_id: &str,
    service_name: Option<&str>,
) -> Result<Vec<Subscription>> {
    let mut query = QueryBuilder::<Postgres>::new(
        "SELECT id, service_name, price, user_id, start_date, end_date, created_at, updated_at
         FROM subscriptions WHERE user_id = ",
    );
    query.push_bind(user_id);

    if let Some(service_name) = service_name {
        query.push(" AND service_name = ");
        query.push_bind(service_name);
    }

    let subscriptions = query
        .build_query_as::<Subscription>()
        .fetch_all(pool)
        .await?;

    Ok(subscriptions)
}

/// Sum of `price` over the user's subscriptions whose `start_date` falls
/// within `[from, to]` inclusive, optionally narrowed to one service.
/// Returns 0 when no rows match.
pub async fn sum_prices(
    pool: &PgPool,
    user_id: &str,
    service_name: Option<&str>,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<i64> {
    let mut query = QueryBuilder::<Postgres>::new(
        "SELECT COALESCE(SUM(price), 0)::BIGINT FROM subscriptions WHERE user_id = ",
    );
    query.push_bind(user_id);
    query.push(" AND start_date >= ");
    query.push_bind(from);
    query.push(" AND start_date <= ");
    query.push_bind(to);

    if let Some(service_name) = service_name {
        query.push(" AND service_name = ");
        query.push_bind(service_name);
    }

    let sum = query.build_query_scalar::<i64>().fetch_one(pool).await?;

    Ok(sum)
}
