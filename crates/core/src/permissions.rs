//! Per-user carrier/vendor permission lists.
//!
//! A user carries an ordered list of [`CarrierPermission`] entries. Each entry
//! names a carrier, a boolean allowed/blocked flag, and an ordered list of
//! [`VendorEntry`] values scoping which vendors may be used under that
//! carrier. Carrier names are unique within a user's list; vendor names are
//! unique within a carrier. All matching is exact and case-sensitive.
//!
//! The mutation functions here are pure: they operate on the in-memory list
//! and report [`PermissionError`] on rule violations. Persistence (a single
//! whole-list write, last-write-wins) is the caller's concern.
//!
//! # Legacy vendor entries
//!
//! Older data stored vendors as bare strings and only switched to the
//! structured `{name, status}` form once a status update touched the list,
//! leaving mixed-type collections behind. Deserialization here accepts both
//! forms and always produces the structured form (status defaults to `true`),
//! so a list is fully normalized the next time it is persisted.

use serde::{Deserialize, Serialize};

/// A vendor permitted under a carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorEntry {
    /// Vendor name, unique within the carrier's list.
    pub name: String,
    /// Whether the vendor is currently allowed.
    pub status: bool,
}

impl VendorEntry {
    /// A freshly added vendor, allowed by default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: true,
        }
    }
}

/// Wire forms a vendor entry may arrive in.
#[derive(Deserialize)]
#[serde(untagged)]
enum VendorForm {
    Structured {
        name: String,
        #[serde(default = "default_vendor_status")]
        status: bool,
    },
    // Legacy bare-string entry, predating vendor status flags.
    Bare(String),
}

const fn default_vendor_status() -> bool {
    true
}

impl<'de> Deserialize<'de> for VendorEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match VendorForm::deserialize(deserializer)? {
            VendorForm::Structured { name, status } => Self { name, status },
            VendorForm::Bare(name) => Self { name, status: true },
        })
    }
}

/// A carrier a user may ship with, plus its vendor scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierPermission {
    /// Carrier name, unique within the user's list.
    pub carrier: String,
    /// Whether the carrier is currently allowed.
    pub status: bool,
    /// Vendors permitted under this carrier.
    #[serde(default)]
    pub allowed_vendors: Vec<VendorEntry>,
}

impl CarrierPermission {
    /// A freshly added carrier: blocked until explicitly enabled, no vendors.
    #[must_use]
    pub fn new(carrier: impl Into<String>) -> Self {
        Self {
            carrier: carrier.into(),
            status: false,
            allowed_vendors: Vec::new(),
        }
    }
}

/// Rule violations when mutating a permission list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    /// The carrier is already present in the user's list.
    #[error("carrier already exists: {0}")]
    DuplicateCarrier(String),
    /// The vendor is already present in the carrier's list.
    #[error("vendor already exists: {0}")]
    DuplicateVendor(String),
    /// No carrier with that name in the user's list.
    #[error("carrier not found: {0}")]
    UnknownCarrier(String),
    /// No vendor with that name in the carrier's list.
    #[error("vendor not found: {0}")]
    UnknownVendor(String),
}

/// Append a new carrier with `status = false` and no vendors.
///
/// # Errors
///
/// Returns [`PermissionError::DuplicateCarrier`] if the name is already
/// present (exact match).
pub fn add_carrier(
    list: &mut Vec<CarrierPermission>,
    carrier: &str,
) -> Result<(), PermissionError> {
    if list.iter().any(|c| c.carrier == carrier) {
        return Err(PermissionError::DuplicateCarrier(carrier.to_owned()));
    }
    list.push(CarrierPermission::new(carrier));
    Ok(())
}

/// Append a vendor (allowed by default) to the named carrier.
///
/// # Errors
///
/// Returns [`PermissionError::UnknownCarrier`] if the carrier is absent, or
/// [`PermissionError::DuplicateVendor`] if the vendor name is already present
/// under it.
pub fn add_vendor(
    list: &mut [CarrierPermission],
    carrier: &str,
    vendor: &str,
) -> Result<(), PermissionError> {
    let entry = find_carrier(list, carrier)?;
    if entry.allowed_vendors.iter().any(|v| v.name == vendor) {
        return Err(PermissionError::DuplicateVendor(vendor.to_owned()));
    }
    entry.allowed_vendors.push(VendorEntry::new(vendor));
    Ok(())
}

/// Set the allowed/blocked flag on the named carrier.
///
/// # Errors
///
/// Returns [`PermissionError::UnknownCarrier`] if the carrier is absent.
pub fn set_carrier_status(
    list: &mut [CarrierPermission],
    carrier: &str,
    status: bool,
) -> Result<(), PermissionError> {
    find_carrier(list, carrier)?.status = status;
    Ok(())
}

/// Set the allowed/blocked flag on the named vendor under the named carrier.
///
/// # Errors
///
/// Returns [`PermissionError::UnknownCarrier`] or
/// [`PermissionError::UnknownVendor`] if either is absent.
pub fn set_vendor_status(
    list: &mut [CarrierPermission],
    carrier: &str,
    vendor: &str,
    status: bool,
) -> Result<(), PermissionError> {
    let entry = find_carrier(list, carrier)?;
    let found = entry
        .allowed_vendors
        .iter_mut()
        .find(|v| v.name == vendor)
        .ok_or_else(|| PermissionError::UnknownVendor(vendor.to_owned()))?;
    found.status = status;
    Ok(())
}

fn find_carrier<'a>(
    list: &'a mut [CarrierPermission],
    carrier: &str,
) -> Result<&'a mut CarrierPermission, PermissionError> {
    list.iter_mut()
        .find(|c| c.carrier == carrier)
        .ok_or_else(|| PermissionError::UnknownCarrier(carrier.to_owned()))
}
