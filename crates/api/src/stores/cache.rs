//! Key-value cache with TTL, backed by Redis.
//!
//! This is the only state shared between API instances. It offers whole-value
//! get and put with expiry and nothing else: no compare-and-swap, no
//! transactions.

use anyhow::Result;
use async_trait::async_trait;
use redis::AsyncCommands;

/// Store for TTL-bounded string values.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Health check - verify the cache is reachable.
    async fn health_check(&self) -> Result<bool>;

    /// Get a value by key. Expired keys read as None.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one, expiring after `ttl_secs`.
    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;
}

/// Redis implementation of CacheStore.
#[derive(Clone)]
pub struct RedisCacheStore {
    client: redis::Client,
}

impl RedisCacheStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn health_check(&self) -> Result<bool> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let result: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(result == "PONG")
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(key, value, ttl_secs).await?;
        Ok(())
    }
}
