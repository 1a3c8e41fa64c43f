//! Shipment pool repository.
//!
//! The pool is an unordered multiset of tracking-number records keyed by
//! (carrier, label type). Producers add in bulk; consumers remove one
//! matching record at a time. Correctness of [`ShipmentRepository::take_one`]
//! hinges on the remove being a single atomic statement against the store -
//! a separate find-then-delete would race under concurrent consumers.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use shipdesk_core::ShipmentId;

use super::RepositoryError;
use crate::models::ShipmentRecord;

/// Internal row type for `PostgreSQL` shipment queries.
#[derive(Debug, sqlx::FromRow)]
struct ShipmentRow {
    id: Uuid,
    carrier: String,
    tracking: String,
    label_type: String,
    created_at: DateTime<Utc>,
}

impl From<ShipmentRow> for ShipmentRecord {
    fn from(row: ShipmentRow) -> Self {
        Self {
            id: ShipmentId::new(row.id),
            carrier: row.carrier,
            tracking: row.tracking,
            label_type: row.label_type,
            created_at: row.created_at,
        }
    }
}

/// A shipment row ready for insertion.
#[derive(Debug, Clone)]
pub struct NewShipment {
    /// Shipping provider identifier.
    pub carrier: String,
    /// Tracking number.
    pub tracking: String,
    /// Label format classification.
    pub label_type: String,
}

/// Repository for the shipment tracking-number pool.
pub struct ShipmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShipmentRepository<'a> {
    /// Create a new shipment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Bulk-insert a batch of shipment rows.
    ///
    /// The whole batch goes through one multi-row INSERT, so either every row
    /// persists or the call errors - no row is silently dropped. Duplicates
    /// are permitted by design.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub async fn insert_batch(&self, rows: &[NewShipment]) -> Result<u64, RepositoryError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let carriers: Vec<&str> = rows.iter().map(|r| r.carrier.as_str()).collect();
        let trackings: Vec<&str> = rows.iter().map(|r| r.tracking.as_str()).collect();
        let label_types: Vec<&str> = rows.iter().map(|r| r.label_type.as_str()).collect();

        let result = sqlx::query(
            "INSERT INTO shipments (carrier, tracking, label_type) \
             SELECT * FROM UNNEST($1::text[], $2::text[], $3::text[])",
        )
        .bind(&carriers)
        .bind(&trackings)
        .bind(&label_types)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// List every record currently in the pool. No ordering guarantee.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<ShipmentRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShipmentRow>(
            "SELECT id, carrier, tracking, label_type, created_at FROM shipments",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Atomically remove and return one record matching (carrier, label type).
    ///
    /// Matching is exact and case-sensitive. The selection carries no
    /// ordering guarantee; `SKIP LOCKED` ensures two concurrent callers can
    /// never be handed the same row, and the single-statement
    /// `DELETE ... RETURNING` means a returned record is removed in the same
    /// step.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record matches at call time.
    #[instrument(skip(self))]
    pub async fn take_one(
        &self,
        carrier: &str,
        label_type: &str,
    ) -> Result<ShipmentRecord, RepositoryError> {
        let row = sqlx::query_as::<_, ShipmentRow>(
            "DELETE FROM shipments \
             WHERE id = ( \
                 SELECT id FROM shipments \
                 WHERE carrier = $1 AND label_type = $2 \
                 FOR UPDATE SKIP LOCKED \
                 LIMIT 1 \
             ) \
             RETURNING id, carrier, tracking, label_type, created_at",
        )
        .bind(carrier)
        .bind(label_type)
        .fetch_optional(self.pool)
        .await?;

        row.map(Into::into).ok_or(RepositoryError::NotFound)
    }
}
