//! Per-client login attempt throttling.
//!
//! A fixed-window counter keyed by client IP: each window admits a bounded
//! number of login attempts, and the window resets once its duration elapses.
//! State is in-process only; a multi-instance deployment would need a shared
//! store, which this API does not require.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    attempts: u32,
}

/// Fixed-window rate limiter for login attempts.
pub struct LoginRateLimiter {
    max_attempts: u32,
    window: Duration,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

impl LoginRateLimiter {
    /// Create a limiter admitting `max_attempts` per `window` per client.
    #[must_use]
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record an attempt from `client` and report whether it is admitted.
    ///
    /// Attempts beyond the limit still count against the current window, so
    /// hammering the endpoint does not shorten the wait.
    pub async fn check(&self, client: IpAddr) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        // Drop expired windows opportunistically so the map stays bounded
        windows.retain(|_, w| now.duration_since(w.started) < self.window);

        let window = windows.entry(client).or_insert(Window {
            started: now,
            attempts: 0,
        });

        window.attempts += 1;
        window.attempts <= self.max_attempts
    }
}
