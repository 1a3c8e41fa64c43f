//! Supporting services: token issuance, password hashing, login throttling.

pub mod login_limiter;
pub mod passwords;
pub mod tokens;

pub use login_limiter::LoginRateLimiter;
pub use tokens::{Claims, TokenError, TokenService};
