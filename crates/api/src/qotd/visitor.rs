//! Per-visitor "already served today" markers.
//!
//! Visitors are identified by a best-effort client id (usually the source IP),
//! so clients behind one NAT share a marker. A marker is never cleared before
//! its TTL runs out.

use std::sync::Arc;

use crate::stores::CacheStore;

use super::{
    QotdError,
    keys::{self, DateKey, ENTRY_TTL_SECS, VISITOR_FLAG_VALUE},
};

#[derive(Clone)]
pub struct VisitorFlags {
    cache: Arc<dyn CacheStore>,
}

impl VisitorFlags {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    /// True if the visitor was already served the quote of the day.
    /// Only presence matters, not the stored value.
    pub async fn has_requested_today(
        &self,
        visitor_id: &str,
        date_key: &DateKey,
    ) -> Result<bool, QotdError> {
        let key = keys::visitor_key(visitor_id, date_key);
        let value = self
            .cache
            .get(&key)
            .await
            .map_err(|error| QotdError::CacheRead { key, error })?;
        Ok(value.is_some())
    }

    /// Record that the visitor got today's quote. Failures are logged only.
    pub async fn mark_requested(&self, visitor_id: &str, date_key: &DateKey) {
        let key = keys::visitor_key(visitor_id, date_key);
        if let Err(error) = self
            .cache
            .put(&key, VISITOR_FLAG_VALUE, ENTRY_TTL_SECS)
            .await
        {
            let e = QotdError::CacheWrite { key, error };
            tracing::warn!(visitor_id = %visitor_id, error = %e, "failed to mark visitor");
        }
    }
}
