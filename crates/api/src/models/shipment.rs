//! Shipment tracking-number records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shipdesk_core::ShipmentId;

use crate::db::shipments::NewShipment;

/// A tracking-number record held in the pool.
#[derive(Debug, Clone)]
pub struct ShipmentRecord {
    pub id: ShipmentId,
    pub carrier: String,
    pub tracking: String,
    pub label_type: String,
    pub created_at: DateTime<Utc>,
}

/// Client-facing shipment representation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentView {
    pub carrier: String,
    pub tracking: String,
    pub label_type: String,
}

impl From<ShipmentRecord> for ShipmentView {
    fn from(record: ShipmentRecord) -> Self {
        Self {
            carrier: record.carrier,
            tracking: record.tracking,
            label_type: record.label_type,
        }
    }
}

/// One row of an ingestion batch.
///
/// Upstream spreadsheets are inconsistent about field casing, so each field
/// accepts the variants that have been seen in the wild and normalizes them
/// here at the boundary. Storage only ever sees the canonical names.
#[derive(Debug, Clone, Deserialize)]
pub struct RawShipmentRow {
    #[serde(alias = "Carrier")]
    pub carrier: String,
    #[serde(alias = "Tracking", alias = "trackingNumber")]
    pub tracking: String,
    #[serde(rename = "labelType", alias = "LabelType", alias = "label_type")]
    pub label_type: String,
}

impl From<RawShipmentRow> for NewShipment {
    fn from(row: RawShipmentRow) -> Self {
        Self {
            carrier: row.carrier,
            tracking: row.tracking,
            label_type: row.label_type,
        }
    }
}
