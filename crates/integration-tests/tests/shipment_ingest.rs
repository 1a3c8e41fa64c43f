//! Ingestion row normalization.
//!
//! Upload batches arrive with whatever field casing the source spreadsheet
//! used. These tests feed the raw JSON shapes seen in real uploads through
//! the boundary type and check that storage-side rows come out canonical.

#![allow(clippy::unwrap_used)]

use shipdesk_api::db::shipments::NewShipment;
use shipdesk_api::models::RawShipmentRow;

#[test]
fn mixed_casing_batch_normalizes() {
    let batch = serde_json::json!([
        {"carrier": "UPS", "tracking": "1Z001", "labelType": "thermal"},
        {"Carrier": "UPS", "Tracking": "1Z002", "LabelType": "thermal"},
        {"carrier": "FedEx", "trackingNumber": "794601", "label_type": "paper"},
    ]);

    let rows: Vec<NewShipment> = batch
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            serde_json::from_value::<RawShipmentRow>(row.clone())
                .map(Into::into)
                .unwrap()
        })
        .collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].carrier, "UPS");
    assert_eq!(rows[0].tracking, "1Z001");
    assert_eq!(rows[0].label_type, "thermal");
    assert_eq!(rows[1].tracking, "1Z002");
    assert_eq!(rows[2].carrier, "FedEx");
    assert_eq!(rows[2].tracking, "794601");
    assert_eq!(rows[2].label_type, "paper");
}

#[test]
fn malformed_row_fails_with_its_index() {
    // Second row is missing its tracking number; the whole batch must fail
    // rather than insert the valid rows around it.
    let batch = serde_json::json!([
        {"carrier": "UPS", "tracking": "1Z001", "labelType": "thermal"},
        {"carrier": "UPS", "labelType": "thermal"},
    ]);

    let result: Result<Vec<NewShipment>, String> = batch
        .as_array()
        .unwrap()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            serde_json::from_value::<RawShipmentRow>(row.clone())
                .map(Into::into)
                .map_err(|e| format!("row {i}: {e}"))
        })
        .collect();

    let err = result.unwrap_err();
    assert!(err.starts_with("row 1:"), "unexpected error: {err}");
}

#[test]
fn extra_fields_are_ignored() {
    // Uploads often carry bookkeeping columns the pool does not store
    let row: RawShipmentRow = serde_json::from_value(serde_json::json!({
        "carrier": "UPS",
        "tracking": "1Z001",
        "labelType": "thermal",
        "weight": "2.4",
        "orderRef": "SO-1138",
    }))
    .unwrap();

    let shipment: NewShipment = row.into();
    assert_eq!(shipment.carrier, "UPS");
}
