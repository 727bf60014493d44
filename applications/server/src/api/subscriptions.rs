/// Subscriptions API routes
use crate::error::{Result, ServerError};
use crate::services::subscriptions::{CreateSubscriptionRequest, UpdateSubscriptionRequest};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use subtrack_core::Subscription;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub user_id: Option<String>,
    pub service_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SumQuery {
    pub user_id: Option<String>,
    pub service_name: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SumResponse {
    pub sum: i64,
}

/// POST /subscriptions
/// Create a new subscription
pub async fn create_subscription(
    State(state): State<AppState>,
    Json(request): Json<CreateSubscriptionRequest>,
) -> Result<(StatusCode, Json<Subscription>)> {
    let subscription = state.subscriptions.create(request).await?;
    Ok((StatusCode::CREATED, Json(subscription)))
}

/// GET /subscriptions/:id
/// Get a subscription by id
pub async fn get_subscription(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Subscription>> {
    let subscription = state.subscriptions.get(id).await?;
    Ok(Json(subscription))
}

/// PUT /subscriptions/:id
/// Partially update a subscription; absent fields are left unchanged
pub async fn update_subscription(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<UpdateSubscriptionRequest>,
) -> Result<Json<Subscription>> {
    let subscription = state.subscriptions.update(id, request).await?;
    Ok(Json(subscription))
}

/// DELETE /subscriptions/:id
/// Delete a subscription
pub async fn delete_subscription(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    state.subscriptions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /subscriptions?user_id=&service_name=
/// List a user's subscriptions, optionally narrowed to one service
pub async fn list_subscriptions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Subscription>>> {
    // Presence is checked here as well as in the service so that the
    // request never reaches storage without a user filter.
    let user_id = require_param(query.user_id.as_deref(), "user_id")?;

    let subscriptions = state
        .subscriptions
        .list(user_id, query.service_name.as_deref())
        .await?;

    Ok(Json(subscriptions))
}

/// GET /subscriptions/sum?user_id=&from=&to=&service_name=
/// Sum subscription prices for a user over an inclusive month range
pub async fn sum_subscriptions(
    State(state): State<AppState>,
    Query(query): Query<SumQuery>,
) -> Result<Json<SumResponse>> {
    let user_id = require_param(query.user_id.as_deref(), "user_id")?;
    let from = require_param(query.from.as_deref(), "from")?;
    let to = require_param(query.to.as_deref(), "to")?;

    let sum = state
        .subscriptions
        .sum(user_id, query.service_name.as_deref(), from, to)
        .await?;

    Ok(Json(SumResponse { sum }))
}

fn require_param<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ServerError::Validation(format!("{name} is required"))),
    }
}
