//! Ephemeral stores.
//!
//! All data stored here has automatic TTL-based expiration. Production uses
//! Redis; a process-local store is available when no Redis URL is configured.
//!
//! ## Key Patterns
//!
//! ```text
//! qotd_{YYYY-MM-DD}                          → quote id of the day (24h TTL)
//! qotd_requested_{visitor}_{YYYY-MM-DD}      → "1" once the visitor got it (24h TTL)
//! ```
//!
//! ## Usage
//!
//! Stores are accessed via `state.stores`:
//!
//! ```ignore
//! let id = state.stores.cache.get("qotd_2024-01-15").await?;
//! ```

mod cache;
mod memory;

pub use cache::{CacheStore, RedisCacheStore};
pub use memory::MemoryCacheStore;

#[cfg(test)]
pub use cache::MockCacheStore;

use std::sync::Arc;

/// Collection of all ephemeral stores.
#[derive(Clone)]
pub struct Stores {
    pub cache: Arc<dyn CacheStore>,
}
