//! End-to-end permission document scenarios.
//!
//! These drive a user's carrier document through the same sequence of pure
//! mutations the handlers apply, then check the wire JSON the client would
//! receive and that a reloaded document round-trips.

#![allow(clippy::unwrap_used)]

use shipdesk_core::{CarrierPermission, PermissionError, permissions};

#[test]
fn carrier_onboarding_lifecycle() {
    let mut doc: Vec<CarrierPermission> = Vec::new();

    // Admin adds a carrier: it starts blocked with no vendors
    permissions::add_carrier(&mut doc, "UPS").unwrap();
    assert!(!doc[0].status);
    assert!(doc[0].allowed_vendors.is_empty());

    // Vendors are scoped in, allowed by default
    permissions::add_vendor(&mut doc, "UPS", "acme").unwrap();
    permissions::add_vendor(&mut doc, "UPS", "globex").unwrap();

    // Carrier enabled, one vendor later blocked
    permissions::set_carrier_status(&mut doc, "UPS", true).unwrap();
    permissions::set_vendor_status(&mut doc, "UPS", "globex", false).unwrap();

    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(
        json,
        r#"[{"carrier":"UPS","status":true,"allowedVendors":[{"name":"acme","status":true},{"name":"globex","status":false}]}]"#
    );

    // What was persisted reads back identically
    let reloaded: Vec<CarrierPermission> = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, doc);
}

#[test]
fn mutations_target_the_named_carrier_only() {
    let mut doc: Vec<CarrierPermission> = Vec::new();
    permissions::add_carrier(&mut doc, "UPS").unwrap();
    permissions::add_carrier(&mut doc, "FedEx").unwrap();

    permissions::add_vendor(&mut doc, "FedEx", "acme").unwrap();
    permissions::set_carrier_status(&mut doc, "FedEx", true).unwrap();

    assert!(!doc[0].status);
    assert!(doc[0].allowed_vendors.is_empty());
    assert!(doc[1].status);
    assert_eq!(doc[1].allowed_vendors.len(), 1);

    // Same vendor name under a different carrier is fine
    permissions::add_vendor(&mut doc, "UPS", "acme").unwrap();
    assert_eq!(doc[0].allowed_vendors.len(), 1);
}

#[test]
fn failed_mutation_leaves_document_untouched() {
    let mut doc: Vec<CarrierPermission> = Vec::new();
    permissions::add_carrier(&mut doc, "UPS").unwrap();
    permissions::add_vendor(&mut doc, "UPS", "acme").unwrap();
    let before = doc.clone();

    assert_eq!(
        permissions::add_carrier(&mut doc, "UPS").unwrap_err(),
        PermissionError::DuplicateCarrier("UPS".to_owned())
    );
    assert_eq!(
        permissions::add_vendor(&mut doc, "UPS", "acme").unwrap_err(),
        PermissionError::DuplicateVendor("acme".to_owned())
    );
    assert_eq!(
        permissions::set_vendor_status(&mut doc, "UPS", "ghost", true).unwrap_err(),
        PermissionError::UnknownVendor("ghost".to_owned())
    );
    assert_eq!(
        permissions::set_carrier_status(&mut doc, "DHL", true).unwrap_err(),
        PermissionError::UnknownCarrier("DHL".to_owned())
    );

    assert_eq!(doc, before);
}

#[test]
fn legacy_document_normalizes_on_next_write() {
    // A stored document as the pre-migration data could hold it: the first
    // carrier's vendors are bare strings, the second's are structured.
    let stored = r#"[
        {"carrier":"UPS","status":true,"allowedVendors":["acme","globex"]},
        {"carrier":"FedEx","status":false,"allowedVendors":[{"name":"initech","status":false}]}
    ]"#;

    let mut doc: Vec<CarrierPermission> = serde_json::from_str(stored).unwrap();

    // Bare entries come in allowed, structured ones keep their flag
    assert!(doc[0].allowed_vendors.iter().all(|v| v.status));
    assert!(!doc[1].allowed_vendors[0].status);

    // Any mutation-then-save rewrites the whole document in structured form
    permissions::set_vendor_status(&mut doc, "UPS", "globex", false).unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(
        json,
        r#"[{"carrier":"UPS","status":true,"allowedVendors":[{"name":"acme","status":true},{"name":"globex","status":false}]},{"carrier":"FedEx","status":false,"allowedVendors":[{"name":"initech","status":false}]}]"#
    );
}
