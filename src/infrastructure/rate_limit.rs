//! Per-user rate limiting
//!
//! Sliding window limiter keyed by an opaque string (user id here). The check
//! and the record happen under one write lock so concurrent requests from the
//! same user cannot both consume the last slot in the window.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Capability consumed by request handlers: one unit per call
#[async_trait]
pub trait RateLimiter: Send + Sync + Debug {
    /// Consume one slot for `key`. Returns false when the limit is exhausted;
    /// a rejected call does not count against the window.
    async fn try_consume(&self, key: &str) -> bool;

    /// Drop all recorded requests for a key
    async fn reset(&self, key: &str);
}

/// Sliding window rate limiter
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    /// Maximum requests per window
    limit: u32,
    /// Window length
    window: Duration,
    /// Per-key request timestamps
    records: Arc<RwLock<HashMap<String, Vec<Instant>>>>,
    /// Cleanup interval for stale keys
    cleanup_interval: Duration,
    /// Last cleanup time
    last_cleanup: Arc<RwLock<Instant>>,
}

impl SlidingWindowLimiter {
    /// Create a limiter allowing `limit` requests per `window`
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            records: Arc::new(RwLock::new(HashMap::new())),
            cleanup_interval: Duration::from_secs(300),
            last_cleanup: Arc::new(RwLock::new(Instant::now())),
        }
    }

    /// Limiter allowing `limit` requests per minute
    pub fn per_minute(limit: u32) -> Self {
        Self::new(limit, Duration::from_secs(60))
    }

    async fn maybe_cleanup(&self) {
        let should_cleanup = {
            let last = self.last_cleanup.read().await;
            last.elapsed() >= self.cleanup_interval
        };

        if should_cleanup {
            let mut last = self.last_cleanup.write().await;
            *last = Instant::now();

            let now = Instant::now();
            let cutoff = now.checked_sub(self.window).unwrap_or(now);

            let mut records = self.records.write().await;

            for timestamps in records.values_mut() {
                timestamps.retain(|t| *t >= cutoff);
            }

            records.retain(|_, v| !v.is_empty());
        }
    }
}

#[async_trait]
impl RateLimiter for SlidingWindowLimiter {
    async fn try_consume(&self, key: &str) -> bool {
        self.maybe_cleanup().await;

        let now = Instant::now();
        let window_start = now.checked_sub(self.window).unwrap_or(now);

        let mut records = self.records.write().await;
        let timestamps = records.entry(key.to_string()).or_default();

        timestamps.retain(|t| *t >= window_start);

        if timestamps.len() as u32 >= self.limit {
            return false;
        }

        timestamps.push(now);
        true
    }

    async fn reset(&self, key: &str) {
        let mut records = self.records.write().await;
        records.remove(key);
    }
}
