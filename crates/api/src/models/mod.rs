//! Domain models for the API.

pub mod admin;
pub mod shipment;
pub mod user;

pub use admin::{Admin, AdminView};
pub use shipment::{RawShipmentRow, ShipmentRecord, ShipmentView};
pub use user::{User, UserView};
