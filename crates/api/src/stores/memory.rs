//! In-process implementation of `CacheStore`.
//!
//! Entries live in a `HashMap` guarded by a `tokio::sync::RwLock`, each with
//! its own deadline. Expired entries read as absent. They are dropped when
//! their key is read, and writes sweep the whole map at most once per
//! `SWEEP_INTERVAL`, so keys that are never read again (yesterday's visitor
//! markers) do not pile up.
//!
//! State is lost on restart and is not shared between processes, so running
//! more than one API instance against this store gives every instance its own
//! quote of the day. Use Redis for anything beyond a single process.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::CacheStore;

/// Minimum time between two full sweeps of expired entries.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    next_sweep: Option<Instant>,
}

impl Inner {
    fn sweep_if_due(&mut self, now: Instant) {
        if self.next_sweep.is_some_and(|at| now < at) {
            return;
        }

        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live(now));
        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::debug!(
                evicted,
                remaining = self.entries.len(),
                "swept expired cache entries"
            );
        }

        self.next_sweep = Some(now + SWEEP_INTERVAL);
    }
}

#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    inner: RwLock<Inner>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        {
            let inner = self.inner.read().await;
            match inner.entries.get(key) {
                None => return Ok(None),
                Some(entry) if entry.is_live(now) => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        // Re-check under the write lock; a concurrent put may have refreshed it.
        let mut inner = self.inner.write().await;
        if inner.entries.get(key).is_some_and(|entry| !entry.is_live(now)) {
            inner.entries.remove(key);
        }
        Ok(inner
            .entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone()))
    }

    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let now = Instant::now();
        let mut inner = self.inner.write().await;
        inner.sweep_if_due(now);
        inner.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: now + Duration::from_secs(ttl_secs),
            },
        );
        Ok(())
    }
}
