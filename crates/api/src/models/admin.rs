//! API operator accounts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shipdesk_core::{AdminId, Email};

/// An admin account as stored. Never serialized to clients directly.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: AdminId,
    pub name: String,
    pub email: Email,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Client-facing admin representation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminView {
    pub id: AdminId,
    pub name: String,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

impl From<Admin> for AdminView {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            created_at: admin.created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_view_strips_credential() {
        let admin = Admin {
            id: AdminId::generate(),
            name: "Ops".to_string(),
            email: Email::parse("ops@example.com").unwrap(),
            password_hash: "$argon2id$super-secret-hash".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&AdminView::from(admin)).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"name\":\"Ops\""));
    }
}
