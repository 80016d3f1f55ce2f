//! Mock fallback for resources configured as `mocked`.
//!
//! Mocked resources never touch the network. Reads come from the fixed sample set in [`data`],
//! writes are synthesized from the caller's payload, and every call first waits out an
//! artificial latency so callers see loading states the way they would against a real
//! backend.

pub mod data;

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use crate::errors::{Error, Result};

/// Latency applied when the configuration does not say otherwise
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Artificial latency source shared by every mocked resource.
#[derive(Debug, Clone)]
pub struct MockSource {
    latency: Duration,
}

impl MockSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Sleep for the configured latency
    pub async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

static LAST_MOCK_ID: AtomicI64 = AtomicI64::new(0);

/// Identifier for a synthesized record: the current Unix time in milliseconds, bumped when two
/// records are created within the same millisecond so ids stay unique within the process.
pub fn mock_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_MOCK_ID.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_MOCK_ID.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next.to_string(),
            Err(current) => last = current,
        }
    }
}

/// Look up a sample record by id
pub(crate) fn find<T>(records: Vec<T>, resource: &'static str, id: &str, key: impl Fn(&T) -> &str) -> Result<T> {
    records.into_iter().find(|record| key(record) == id).ok_or_else(|| Error::NotFound {
        resource,
        id: id.to_string(),
    })
}
