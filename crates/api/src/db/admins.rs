//! Admin repository for database operations.
//!
//! Admins are created only through registration and never updated elsewhere.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use shipdesk_core::{AdminId, Email};

use super::RepositoryError;
use crate::models::Admin;

/// Internal row type for `PostgreSQL` admin queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for Admin {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: AdminId::new(row.id),
            name: row.name,
            email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

/// Repository for admin database operations.
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new admin. The password must already be hashed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already
    /// registered, `RepositoryError::Database` for other failures.
    #[instrument(skip(self, password_hash), fields(email = %email))]
    pub async fn insert(
        &self,
        name: &str,
        email: &Email,
        password_hash: &str,
    ) -> Result<Admin, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            "INSERT INTO admins (name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, email, password_hash, created_at",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "email already registered"))?;

        row.try_into()
    }

    /// Look up an admin by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<Admin>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, name, email, password_hash, created_at \
             FROM admins WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion() {
        let row = AdminRow {
            id: Uuid::new_v4(),
            name: "Ops".to_string(),
            email: "ops@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: Utc::now(),
        };

        let admin: Admin = row.try_into().unwrap();
        assert_eq!(admin.name, "Ops");
        assert_eq!(admin.email.as_str(), "ops@example.com");
    }

    #[test]
    fn test_row_conversion_rejects_bad_email() {
        let row = AdminRow {
            id: Uuid::new_v4(),
            name: "Ops".to_string(),
            email: "broken".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: Utc::now(),
        };

        let result: Result<Admin, _> = row.try_into();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }
}
