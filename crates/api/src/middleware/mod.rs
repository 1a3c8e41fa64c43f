//! Request extractors and middleware.

pub mod auth;
pub mod extract;

pub use auth::{RequireAuth, ensure_admin};
pub use extract::ApiJson;
