//! Database operations for the API's `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `admins` - API operators (registration + login)
//! - `users` - Managed accounts with their `allowed_carriers` JSONB document
//! - `shipments` - Unordered pool of tracking numbers
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and run at startup via
//! `sqlx::migrate!`.

pub mod admins;
pub mod shipments;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admins::AdminRepository;
pub use shipments::ShipmentRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Postgres error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

impl RepositoryError {
    /// Convert a sqlx error, turning unique violations into [`Self::Conflict`].
    pub(crate) fn from_sqlx(err: sqlx::Error, conflict_msg: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
        {
            return Self::Conflict(conflict_msg.to_owned());
        }
        Self::Database(err)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
