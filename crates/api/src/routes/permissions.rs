//! Carrier/vendor permission handlers (admin-only).
//!
//! Each mutation loads the user's permission document, applies the pure
//! list operation from `shipdesk-core`, and persists the whole document in
//! one write. Concurrent edits to the same user are last-write-wins; see
//! DESIGN.md for why this is accepted rather than fixed.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use shipdesk_core::{CarrierPermission, UserId, permissions};

use crate::{
    db::UserRepository,
    error::ApiError,
    middleware::{ApiJson, RequireAuth, ensure_admin},
    models::UserView,
    state::AppState,
};

/// `PUT /{userId}/carriers` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarriersReplace {
    pub allowed_carriers: Vec<CarrierPermission>,
}

/// `POST /add-carrier` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCarrier {
    pub user_id: UserId,
    pub carrier: String,
}

/// `POST /add-vendor` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddVendor {
    pub user_id: UserId,
    pub carrier: String,
    pub vendor: String,
}

/// `PUT /update-carrier-status` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierStatusUpdate {
    pub user_id: UserId,
    pub carrier: String,
    pub status: bool,
}

/// `PUT /update-vendor-status` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorStatusUpdate {
    pub user_id: UserId,
    pub carrier: String,
    pub vendor: String,
    pub status: bool,
}

/// `PUT /{userId}/carriers` - Wholesale replace the carrier list.
#[instrument(skip(claims, state, body))]
pub async fn replace_carriers(
    RequireAuth(claims): RequireAuth,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    ApiJson(body): ApiJson<CarriersReplace>,
) -> Result<Json<UserView>, ApiError> {
    ensure_admin(&claims)?;

    let user = UserRepository::new(state.pool())
        .save_carriers(user_id, &body.allowed_carriers)
        .await?;
    Ok(Json(user.into()))
}

/// `POST /add-carrier` - Append a carrier, blocked with no vendors.
#[instrument(skip(claims, state, body))]
pub async fn add_carrier(
    RequireAuth(claims): RequireAuth,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<AddCarrier>,
) -> Result<Json<UserView>, ApiError> {
    ensure_admin(&claims)?;

    let repo = UserRepository::new(state.pool());
    let mut user = repo.get_by_id(body.user_id).await?;

    permissions::add_carrier(&mut user.allowed_carriers, &body.carrier)?;

    let user = repo.save_carriers(body.user_id, &user.allowed_carriers).await?;
    Ok(Json(user.into()))
}

/// `POST /add-vendor` - Append a vendor under a carrier, allowed by default.
#[instrument(skip(claims, state, body))]
pub async fn add_vendor(
    RequireAuth(claims): RequireAuth,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<AddVendor>,
) -> Result<Json<UserView>, ApiError> {
    ensure_admin(&claims)?;

    let repo = UserRepository::new(state.pool());
    let mut user = repo.get_by_id(body.user_id).await?;

    permissions::add_vendor(&mut user.allowed_carriers, &body.carrier, &body.vendor)?;

    let user = repo.save_carriers(body.user_id, &user.allowed_carriers).await?;
    Ok(Json(user.into()))
}

/// `PUT /update-carrier-status` - Set a carrier's allowed flag.
#[instrument(skip(claims, state, body))]
pub async fn update_carrier_status(
    RequireAuth(claims): RequireAuth,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CarrierStatusUpdate>,
) -> Result<Json<UserView>, ApiError> {
    ensure_admin(&claims)?;

    let repo = UserRepository::new(state.pool());
    let mut user = repo.get_by_id(body.user_id).await?;

    permissions::set_carrier_status(&mut user.allowed_carriers, &body.carrier, body.status)?;

    let user = repo.save_carriers(body.user_id, &user.allowed_carriers).await?;
    Ok(Json(user.into()))
}

/// `PUT /update-vendor-status` - Set a vendor's allowed flag.
///
/// Persisting the document also rewrites any legacy bare-string vendor
/// entries in the structured form.
#[instrument(skip(claims, state, body))]
pub async fn update_vendor_status(
    RequireAuth(claims): RequireAuth,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<VendorStatusUpdate>,
) -> Result<Json<UserView>, ApiError> {
    ensure_admin(&claims)?;

    let repo = UserRepository::new(state.pool());
    let mut user = repo.get_by_id(body.user_id).await?;

    permissions::set_vendor_status(
        &mut user.allowed_carriers,
        &body.carrier,
        &body.vendor,
        body.status,
    )?;

    let user = repo.save_carriers(body.user_id, &user.allowed_carriers).await?;
    Ok(Json(user.into()))
}
