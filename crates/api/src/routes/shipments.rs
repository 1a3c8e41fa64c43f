//! Shipment pool handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    db::{RepositoryError, ShipmentRepository, shipments::NewShipment},
    error::ApiError,
    middleware::{ApiJson, RequireAuth},
    models::{RawShipmentRow, ShipmentView},
    state::AppState,
};

/// `POST /upload-shipments` response.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub inserted: u64,
}

/// `POST /pull/shipts` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub carrier: String,
    pub label_type: String,
}

/// `POST /upload-shipments` - Bulk-ingest tracking numbers.
///
/// The body must carry `rows` as a list; each row is validated and
/// normalized before anything is written, so a malformed row fails the whole
/// batch rather than silently dropping it.
#[instrument(skip(_claims, state, body))]
pub async fn upload(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<serde_json::Value>,
) -> Result<Json<UploadResponse>, ApiError> {
    let rows = body
        .get("rows")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| ApiError::Validation("rows must be a list".to_string()))?;

    let shipments: Vec<NewShipment> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            serde_json::from_value::<RawShipmentRow>(row.clone())
                .map(Into::into)
                .map_err(|e| ApiError::Validation(format!("row {i}: {e}")))
        })
        .collect::<Result<_, _>>()?;

    let inserted = ShipmentRepository::new(state.pool())
        .insert_batch(&shipments)
        .await?;

    tracing::info!(inserted, "shipment batch ingested");
    Ok(Json(UploadResponse { inserted }))
}

/// `GET /read/shipts` - List every record in the pool.
#[instrument(skip(_claims, state))]
pub async fn list(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<ShipmentView>>, ApiError> {
    let records = ShipmentRepository::new(state.pool()).list_all().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// `POST /pull/shipts` - Atomically take one record matching the pair.
#[instrument(skip(_claims, state))]
pub async fn pull(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PullRequest>,
) -> Result<Json<ShipmentView>, ApiError> {
    let record = ShipmentRepository::new(state.pool())
        .take_one(&body.carrier, &body.label_type)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => ApiError::NotFound(format!(
                "No shipment for carrier {} with label type {}",
                body.carrier, body.label_type
            )),
            other => ApiError::Database(other),
        })?;

    Ok(Json(record.into()))
}
