//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use crate::config::ApiConfig;
use crate::services::{LoginRateLimiter, TokenService};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The token-signing key and database pool are
/// initialized once at startup and injected here rather than referenced as
/// ambient globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
    tokens: TokenService,
    login_limiter: LoginRateLimiter,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ApiConfig, pool: PgPool) -> Self {
        let tokens = TokenService::new(&config.token_secret, config.token_ttl_secs);
        let login_limiter = LoginRateLimiter::new(
            config.login_max_attempts,
            Duration::from_secs(config.login_window_secs),
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                tokens,
                login_limiter,
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the token service.
    #[must_use]
    pub fn tokens(&self) -> &TokenService {
        &self.inner.tokens
    }

    /// Get a reference to the login rate limiter.
    #[must_use]
    pub fn login_limiter(&self) -> &LoginRateLimiter {
        &self.inner.login_limiter
    }
}
