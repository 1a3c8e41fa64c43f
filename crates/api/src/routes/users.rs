//! User management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use shipdesk_core::{UserId, UserStatus};

use crate::{
    db::UserRepository,
    error::ApiError,
    middleware::{ApiJson, RequireAuth, ensure_admin},
    models::UserView,
    state::AppState,
};

/// `PUT /users/{id}/status` body.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: UserStatus,
}

/// `PUT /users/{id}/balance` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceUpdate {
    pub available_balance: Decimal,
}

/// `PUT /{userId}/is-dealer` body.
///
/// Deserialized loosely so a non-boolean value can be rejected with this
/// API's 400 contract instead of a generic type error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerUpdate {
    pub is_dealer: serde_json::Value,
}

/// `GET /users` - List all users with credentials stripped (admin-only).
#[instrument(skip(claims, state))]
pub async fn list(
    RequireAuth(claims): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserView>>, ApiError> {
    ensure_admin(&claims)?;

    let users = UserRepository::new(state.pool()).list_all().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// `PUT /users/{id}/status` - Set active/blocked (admin-only).
#[instrument(skip(claims, state, body))]
pub async fn update_status(
    RequireAuth(claims): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    ApiJson(body): ApiJson<StatusUpdate>,
) -> Result<Json<UserView>, ApiError> {
    ensure_admin(&claims)?;

    let user = UserRepository::new(state.pool())
        .update_status(id, body.status)
        .await?;
    Ok(Json(user.into()))
}

/// `PUT /users/{id}/balance` - Set the available balance (admin-only).
#[instrument(skip(claims, state, body))]
pub async fn update_balance(
    RequireAuth(claims): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    ApiJson(body): ApiJson<BalanceUpdate>,
) -> Result<Json<UserView>, ApiError> {
    ensure_admin(&claims)?;

    let user = UserRepository::new(state.pool())
        .update_balance(id, body.available_balance)
        .await?;
    Ok(Json(user.into()))
}

/// `PUT /{userId}/is-dealer` - Set the dealer flag.
#[instrument(skip(_claims, state, body))]
pub async fn update_dealer(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    ApiJson(body): ApiJson<DealerUpdate>,
) -> Result<Json<UserView>, ApiError> {
    let serde_json::Value::Bool(is_dealer) = body.is_dealer else {
        return Err(ApiError::Validation(
            "isDealer must be a boolean".to_string(),
        ));
    };

    let user = UserRepository::new(state.pool())
        .update_dealer(user_id, is_dealer)
        .await?;
    Ok(Json(user.into()))
}
