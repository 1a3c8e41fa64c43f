//! Managed user accounts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use shipdesk_core::{CarrierPermission, Email, UserId, UserStatus};

/// A managed user account as stored.
///
/// Holds the password hash, so this type must never be serialized to a
/// client; use [`UserView`] for responses.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: String,
    pub status: UserStatus,
    pub available_balance: Decimal,
    pub is_dealer: bool,
    pub allowed_carriers: Vec<CarrierPermission>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-facing user representation with the credential stripped.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: UserId,
    pub email: Email,
    pub status: UserStatus,
    pub available_balance: Decimal,
    pub is_dealer: bool,
    pub allowed_carriers: Vec<CarrierPermission>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            status: user.status,
            available_balance: user.available_balance,
            is_dealer: user.is_dealer,
            allowed_carriers: user.allowed_carriers,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_view_strips_credential() {
        let user = User {
            id: UserId::generate(),
            email: Email::parse("user@example.com").unwrap(),
            password_hash: "$argon2id$super-secret-hash".to_string(),
            status: UserStatus::Active,
            available_balance: Decimal::ZERO,
            is_dealer: true,
            allowed_carriers: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserView::from(user)).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"isDealer\":true"));
        assert!(json.contains("\"allowedCarriers\":[]"));
    }
}
