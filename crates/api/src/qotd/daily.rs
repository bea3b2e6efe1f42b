//! The shared quote of the day, one per UTC date.
//!
//! The chosen quote id lives under `qotd_{date}` for 24 hours. There is no
//! compare-and-swap on the cache, so two cold requests racing on the same
//! date may each pick and write a different id; the last write wins and
//! later readers converge on it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{models::Quote, repos::QuoteRepo, stores::CacheStore};

use super::{
    QotdError, QuoteTranslator, RandomPicker,
    keys::{self, DateKey, ENTRY_TTL_SECS},
};

#[derive(Clone)]
pub struct DailyQuoteCache {
    cache: Arc<dyn CacheStore>,
    quotes: Arc<dyn QuoteRepo>,
    picker: RandomPicker,
    translator: QuoteTranslator,
}

impl DailyQuoteCache {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        quotes: Arc<dyn QuoteRepo>,
        translator: QuoteTranslator,
    ) -> Self {
        Self {
            cache,
            picker: RandomPicker::new(quotes.clone()),
            quotes,
            translator,
        }
    }

    /// Return the quote of the day for `date_key`, choosing one on a miss.
    ///
    /// Anything wrong with the cached entry (unreadable, corrupt, dangling id,
    /// failed lookup) counts as a miss. Only a failed random pick is returned
    /// as an error. Returns None when storage holds no quotes at all.
    pub async fn get_or_create(
        &self,
        date_key: &DateKey,
        lang: Option<&str>,
    ) -> Result<Option<Quote>, QotdError> {
        let key = keys::daily_key(date_key);

        match self.cached(&key).await {
            Ok(Some(quote)) => {
                debug!(date_key = %date_key, quote_id = quote.id, "daily quote cache hit");
                return Ok(Some(self.translator.localize(quote, lang).await));
            }
            Ok(None) => debug!(date_key = %date_key, "daily quote cache miss"),
            Err(e) => warn!(
                date_key = %date_key,
                error = %e,
                "daily quote unavailable, choosing a new one"
            ),
        }

        let Some(quote) = self.picker.pick_random(None).await? else {
            warn!(date_key = %date_key, "no quote found for quote of the day");
            return Ok(None);
        };

        if let Err(e) = self.store(&key, &quote).await {
            warn!(
                date_key = %date_key,
                quote_id = quote.id,
                error = %e,
                "failed to cache quote of the day"
            );
        } else {
            info!(date_key = %date_key, quote_id = quote.id, "quote of the day chosen");
        }

        Ok(Some(self.translator.localize(quote, lang).await))
    }

    async fn cached(&self, key: &str) -> Result<Option<Quote>, QotdError> {
        let raw = self
            .cache
            .get(key)
            .await
            .map_err(|error| QotdError::CacheRead {
                key: key.to_string(),
                error,
            })?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let id: i32 = raw
            .trim()
            .parse()
            .map_err(|_| QotdError::CorruptEntry {
                key: key.to_string(),
                value: raw.clone(),
            })?;

        let quote = self.quotes.find_by_id(id).await.map_err(QotdError::Storage)?;
        if quote.is_none() {
            warn!(key = %key, quote_id = id, "cached quote of the day no longer exists");
        }
        Ok(quote)
    }

    async fn store(&self, key: &str, quote: &Quote) -> Result<(), QotdError> {
        self.cache
            .put(key, &quote.id.to_string(), ENTRY_TTL_SECS)
            .await
            .map_err(|error| QotdError::CacheWrite {
                key: key.to_string(),
                error,
            })
    }
}
