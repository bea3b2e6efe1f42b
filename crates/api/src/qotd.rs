//! Quote of the day.
//!
//! Every visitor gets the same quote on their first request of a UTC day.
//! Any later request that day from the same visitor gets an independent
//! random quote. Requests filtered by category never take part in the daily
//! sharing.
//!
//! All coordination goes through the cache store; nothing here holds state
//! between requests.
//!
//! ## Failure handling
//!
//! - random pick fails → error (500)
//! - daily entry unreadable or stale → treated as a miss
//! - visitor marker unreadable → no quote (404), logged at error level
//! - cache write or translation fails → logged, request proceeds

mod daily;
mod error;
mod keys;
mod localize;
mod picker;
mod visitor;

pub use daily::DailyQuoteCache;
pub use error::QotdError;
pub use keys::DateKey;
pub use localize::QuoteTranslator;
pub use picker::RandomPicker;
pub use visitor::VisitorFlags;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error};

use crate::{models::Quote, repos::QuoteRepo, stores::CacheStore};

/// Per-request options.
#[derive(Debug, Clone, Default)]
pub struct QuoteOptions {
    pub category_id: Option<i32>,
    pub lang: Option<String>,
}

#[derive(Clone)]
pub struct QuoteOfTheDay {
    picker: RandomPicker,
    daily: DailyQuoteCache,
    visitors: VisitorFlags,
    translator: QuoteTranslator,
}

impl QuoteOfTheDay {
    pub fn new(
        quotes: Arc<dyn QuoteRepo>,
        cache: Arc<dyn CacheStore>,
        translator: QuoteTranslator,
    ) -> Self {
        Self {
            picker: RandomPicker::new(quotes.clone()),
            daily: DailyQuoteCache::new(cache.clone(), quotes, translator.clone()),
            visitors: VisitorFlags::new(cache),
            translator,
        }
    }

    /// Resolve the quote for `visitor_id` right now.
    pub async fn resolve(
        &self,
        visitor_id: &str,
        options: &QuoteOptions,
    ) -> Result<Option<Quote>, QotdError> {
        self.resolve_at(visitor_id, options, Utc::now()).await
    }

    /// Resolve the quote for `visitor_id` as of `now`.
    ///
    /// Returns None when no quote exists or when the visitor marker cannot be
    /// read. Errors are storage failures only.
    pub async fn resolve_at(
        &self,
        visitor_id: &str,
        options: &QuoteOptions,
        now: DateTime<Utc>,
    ) -> Result<Option<Quote>, QotdError> {
        let lang = options.lang.as_deref();

        if let Some(category_id) = options.category_id {
            debug!(category_id, "category requested, skipping daily quote");
            return self.random(Some(category_id), lang).await;
        }

        let date_key = DateKey::from_datetime(now);

        let already_served = match self.visitors.has_requested_today(visitor_id, &date_key).await {
            Ok(served) => served,
            Err(e) => {
                // Not degraded to a random quote so cache outages stay visible.
                error!(
                    visitor_id = %visitor_id,
                    date_key = %date_key,
                    error = %e,
                    "visitor marker unreadable, no quote served"
                );
                return Ok(None);
            }
        };

        if already_served {
            debug!(
                visitor_id = %visitor_id,
                date_key = %date_key,
                "repeat visit, serving random quote"
            );
            return self.random(None, lang).await;
        }

        if let Some(quote) = self.daily.get_or_create(&date_key, lang).await? {
            self.visitors.mark_requested(visitor_id, &date_key).await;
            return Ok(Some(quote));
        }

        let Some(quote) = self.picker.pick_random(None).await? else {
            return Ok(None);
        };
        self.visitors.mark_requested(visitor_id, &date_key).await;
        Ok(Some(self.translator.localize(quote, lang).await))
    }

    /// Random quote, bypassing every cache.
    pub async fn random(
        &self,
        category_id: Option<i32>,
        lang: Option<&str>,
    ) -> Result<Option<Quote>, QotdError> {
        match self.picker.pick_random(category_id).await? {
            Some(quote) => Ok(Some(self.translator.localize(quote, lang).await)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::MockQuoteRepo;
    use crate::services::MockTranslator;
    use crate::stores::{MemoryCacheStore, MockCacheStore};
    use crate::test_utils::mock_quote;
    use chrono::TimeZone;
    use mockall::predicate::eq;

    fn jan_15() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
    }

    fn build(
        quotes: MockQuoteRepo,
        cache: impl CacheStore + 'static,
        translator: MockTranslator,
    ) -> QuoteOfTheDay {
        QuoteOfTheDay::new(
            Arc::new(quotes),
            Arc::new(cache),
            QuoteTranslator::new(Arc::new(translator), "en"),
        )
    }

    fn no_options() -> QuoteOptions {
        QuoteOptions::default()
    }

    #[tokio::test]
    async fn first_visit_picks_caches_and_marks_visitor() {
        let mut cache = MockCacheStore::new();
        cache.expect_get().returning(|_| Ok(None));
        cache
            .expect_put()
            .with(eq("qotd_2024-01-15"), eq("1"), eq(86400u64))
            .times(1)
            .returning(|_, _, _| Ok(()));
        cache
            .expect_put()
            .with(
                eq("qotd_requested_1.2.3.4_2024-01-15"),
                eq("1"),
                eq(86400u64),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .with(eq(None::<i32>))
            .times(1)
            .returning(|_| Ok(Some(mock_quote(1, "Test QotD", 1))));

        let qotd = build(quotes, cache, MockTranslator::new());
        let quote = qotd
            .resolve_at("1.2.3.4", &no_options(), jan_15())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(quote, mock_quote(1, "Test QotD", 1));
    }

    #[tokio::test]
    async fn repeat_visit_skips_daily_entry() {
        let mut cache = MockCacheStore::new();
        cache
            .expect_get()
            .with(eq("qotd_requested_1.2.3.4_2024-01-15"))
            .times(1)
            .returning(|_| Ok(Some("1".to_string())));
        // Any touch of qotd_2024-01-15 or a second marker write fails the test.
        cache.expect_put().never();

        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .with(eq(None::<i32>))
            .times(1)
            .returning(|_| Ok(Some(mock_quote(2, "Random one", 1))));
        quotes.expect_find_by_id().never();

        let qotd = build(quotes, cache, MockTranslator::new());
        let quote = qotd
            .resolve_at("1.2.3.4", &no_options(), jan_15())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(quote.id, 2);
    }

    #[tokio::test]
    async fn category_request_never_touches_cache() {
        // No expectations: any cache call panics.
        let cache = MockCacheStore::new();

        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .with(eq(Some(5)))
            .times(1)
            .returning(|_| Ok(Some(mock_quote(7, "Category quote", 5))));

        let qotd = build(quotes, cache, MockTranslator::new());
        let options = QuoteOptions {
            category_id: Some(5),
            lang: None,
        };
        let quote = qotd
            .resolve_at("9.9.9.9", &options, jan_15())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(quote.id, 7);
        assert_eq!(quote.category_id, 5);
    }

    #[tokio::test]
    async fn category_request_with_no_match_returns_none() {
        let mut quotes = MockQuoteRepo::new();
        quotes.expect_pick_random().returning(|_| Ok(None));

        let qotd = build(quotes, MockCacheStore::new(), MockTranslator::new());
        let options = QuoteOptions {
            category_id: Some(42),
            lang: None,
        };

        let result = qotd.resolve_at("9.9.9.9", &options, jan_15()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn same_visitor_gets_daily_then_random() {
        let mut picks = vec![
            mock_quote(1, "Daily", 1),
            mock_quote(8, "Second visit", 2),
        ]
        .into_iter();
        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .times(2)
            .returning(move |_| Ok(picks.next()));
        quotes.expect_find_by_id().never();

        let cache = Arc::new(MemoryCacheStore::new());
        let qotd = QuoteOfTheDay::new(
            Arc::new(quotes),
            cache.clone(),
            QuoteTranslator::new(Arc::new(MockTranslator::new()), "en"),
        );

        let first = qotd
            .resolve_at("1.2.3.4", &no_options(), jan_15())
            .await
            .unwrap()
            .unwrap();
        let second = qotd
            .resolve_at("1.2.3.4", &no_options(), jan_15())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(
            cache.get("qotd_2024-01-15").await.unwrap().as_deref(),
            Some("1")
        );
        assert_eq!(second.id, 8);
    }

    #[tokio::test]
    async fn other_visitors_share_the_daily_quote() {
        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .times(1)
            .returning(|_| Ok(Some(mock_quote(1, "Daily", 1))));
        quotes
            .expect_find_by_id()
            .with(eq(1))
            .times(2)
            .returning(|id| Ok(Some(mock_quote(id, "Daily", 1))));

        let qotd = build(quotes, MemoryCacheStore::new(), MockTranslator::new());

        for visitor in ["1.1.1.1", "2.2.2.2", "3.3.3.3"] {
            let quote = qotd
                .resolve_at(visitor, &no_options(), jan_15())
                .await
                .unwrap()
                .unwrap();
            assert_eq!(quote.id, 1);
        }
    }

    #[tokio::test]
    async fn new_day_uses_new_keys() {
        let mut picks = vec![mock_quote(1, "Monday", 1), mock_quote(2, "Tuesday", 1)].into_iter();
        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .times(2)
            .returning(move |_| Ok(picks.next()));

        let cache = Arc::new(MemoryCacheStore::new());
        let qotd = QuoteOfTheDay::new(
            Arc::new(quotes),
            cache.clone(),
            QuoteTranslator::new(Arc::new(MockTranslator::new()), "en"),
        );
        let next_day = Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 1).unwrap();

        let today = qotd
            .resolve_at("1.2.3.4", &no_options(), jan_15())
            .await
            .unwrap()
            .unwrap();
        let tomorrow = qotd
            .resolve_at("1.2.3.4", &no_options(), next_day)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(today.id, 1);
        assert_eq!(tomorrow.id, 2);
        assert!(cache.get("qotd_requested_1.2.3.4_2024-01-16").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn translation_failure_serves_original_text() {
        let mut cache = MockCacheStore::new();
        cache.expect_get().returning(|_| Ok(None));
        cache.expect_put().returning(|_, _, _| Ok(()));

        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .returning(|_| Ok(Some(mock_quote(1, "Test QotD", 1))));

        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .returning(|_, _, _| Err(anyhow::anyhow!("unsupported language pair")));

        let qotd = build(quotes, cache, translator);
        let options = QuoteOptions {
            category_id: None,
            lang: Some("tlh".into()),
        };
        let quote = qotd
            .resolve_at("1.2.3.4", &options, jan_15())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(quote.text, "Test QotD");
    }

    #[tokio::test]
    async fn translation_applies_to_category_requests() {
        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .returning(|_| Ok(Some(mock_quote(7, "Be kind", 5))));

        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .with(eq("Be kind"), eq("en"), eq("fr"))
            .returning(|_, _, _| Ok("Sois gentil".to_string()));

        let qotd = build(quotes, MockCacheStore::new(), translator);
        let options = QuoteOptions {
            category_id: Some(5),
            lang: Some("fr".into()),
        };
        let quote = qotd
            .resolve_at("9.9.9.9", &options, jan_15())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(quote.text, "Sois gentil");
    }

    #[tokio::test]
    async fn cache_writes_failing_still_returns_quote() {
        let mut cache = MockCacheStore::new();
        cache.expect_get().returning(|_| Ok(None));
        cache
            .expect_put()
            .times(2)
            .returning(|_, _, _| Err(anyhow::anyhow!("cache is read-only")));

        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .returning(|_| Ok(Some(mock_quote(1, "Test QotD", 1))));

        let qotd = build(quotes, cache, MockTranslator::new());
        let result = qotd.resolve_at("1.2.3.4", &no_options(), jan_15()).await;

        assert_eq!(result.unwrap().unwrap().id, 1);
    }

    #[tokio::test]
    async fn empty_storage_returns_none() {
        let mut cache = MockCacheStore::new();
        cache.expect_get().returning(|_| Ok(None));
        cache.expect_put().never();

        let mut quotes = MockQuoteRepo::new();
        quotes.expect_pick_random().times(2).returning(|_| Ok(None));

        let qotd = build(quotes, cache, MockTranslator::new());
        let result = qotd
            .resolve_at("1.2.3.4", &no_options(), jan_15())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn fallback_pick_marks_visitor() {
        let mut cache = MockCacheStore::new();
        cache.expect_get().returning(|_| Ok(None));
        cache
            .expect_put()
            .with(
                eq("qotd_requested_1.2.3.4_2024-01-15"),
                eq("1"),
                eq(86400u64),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        // Storage was empty for the daily pick, then gained a row.
        let mut picks = vec![None, Some(mock_quote(3, "Just added", 1))].into_iter();
        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .times(2)
            .returning(move |_| Ok(picks.next().flatten()));

        let qotd = build(quotes, cache, MockTranslator::new());
        let quote = qotd
            .resolve_at("1.2.3.4", &no_options(), jan_15())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(quote.id, 3);
    }

    #[tokio::test]
    async fn unreadable_visitor_marker_returns_none() {
        let mut cache = MockCacheStore::new();
        cache
            .expect_get()
            .with(eq("qotd_requested_1.2.3.4_2024-01-15"))
            .returning(|_| Err(anyhow::anyhow!("connection refused")));
        cache.expect_get().with(eq("qotd_2024-01-15")).never();
        cache.expect_put().never();

        let mut quotes = MockQuoteRepo::new();
        quotes.expect_pick_random().never();
        quotes.expect_find_by_id().never();

        let qotd = build(quotes, cache, MockTranslator::new());
        let result = qotd
            .resolve_at("1.2.3.4", &no_options(), jan_15())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let mut cache = MockCacheStore::new();
        cache.expect_get().returning(|_| Ok(None));

        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .returning(|_| Err(anyhow::anyhow!("relation \"quotes\" does not exist")));

        let qotd = build(quotes, cache, MockTranslator::new());
        let result = qotd.resolve_at("1.2.3.4", &no_options(), jan_15()).await;

        assert!(matches!(result, Err(QotdError::Storage(_))));
    }

    #[tokio::test]
    async fn storage_failure_on_repeat_visit_propagates() {
        let mut cache = MockCacheStore::new();
        cache.expect_get().returning(|_| Ok(Some("1".to_string())));

        let mut quotes = MockQuoteRepo::new();
        quotes
            .expect_pick_random()
            .returning(|_| Err(anyhow::anyhow!("too many connections")));

        let qotd = build(quotes, cache, MockTranslator::new());
        let result = qotd.resolve_at("1.2.3.4", &no_options(), jan_15()).await;

        assert!(matches!(result, Err(QotdError::Storage(_))));
    }
}
