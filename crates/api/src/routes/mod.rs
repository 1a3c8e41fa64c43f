//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (verifies database)
//!
//! # Auth
//! POST /register                   - Register an admin
//! POST /login                      - Log in, returns a bearer token
//!
//! # Users (admin-only)
//! GET  /users                      - List users, credentials stripped
//! PUT  /users/{id}/status          - Set active/blocked
//! PUT  /users/{id}/balance         - Set available balance
//!
//! # Dealer flag
//! PUT  /{userId}/is-dealer         - Set the dealer flag
//!
//! # Carrier permissions (admin-only)
//! PUT  /{userId}/carriers          - Wholesale replace the carrier list
//! POST /add-carrier                - Append a carrier (blocked, no vendors)
//! POST /add-vendor                 - Append a vendor under a carrier
//! PUT  /update-carrier-status      - Set a carrier's allowed flag
//! PUT  /update-vendor-status       - Set a vendor's allowed flag
//!
//! # Shipment pool
//! POST /upload-shipments           - Bulk-ingest tracking numbers
//! GET  /read/shipts                - List the pool
//! POST /pull/shipts                - Atomically take one matching record
//! ```
//!
//! Paths are inherited from the system this API replaced and are kept
//! verbatim for client compatibility, oddities included.

pub mod auth;
pub mod permissions;
pub mod shipments;
pub mod users;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        // Users
        .route("/users", get(users::list))
        .route("/users/{id}/status", put(users::update_status))
        .route("/users/{id}/balance", put(users::update_balance))
        .route("/{user_id}/is-dealer", put(users::update_dealer))
        // Carrier permissions
        .route("/{user_id}/carriers", put(permissions::replace_carriers))
        .route("/add-carrier", post(permissions::add_carrier))
        .route("/add-vendor", post(permissions::add_vendor))
        .route("/update-carrier-status", put(permissions::update_carrier_status))
        .route("/update-vendor-status", put(permissions::update_vendor_status))
        // Shipment pool
        .route("/upload-shipments", post(shipments::upload))
        .route("/read/shipts", get(shipments::list))
        .route("/pull/shipts", post(shipments::pull))
}
