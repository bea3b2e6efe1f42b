//! Shared test utilities for API handler tests.
//!
//! Provides common mock factories and a flexible `TestStateBuilder` for constructing
//! `AppState` instances with only the mocks needed for each test.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::test_utils::{TestStateBuilder, mock_quote};
//!
//! let mut quote_repo = MockQuoteRepo::new();
//! quote_repo.expect_find_by_id().returning(|id| Ok(Some(mock_quote(id, "Hello", 1))));
//!
//! let state = TestStateBuilder::new()
//!     .with_quote_repo(quote_repo)
//!     .build();
//! ```

use std::sync::Arc;

use crate::config::Config;
use crate::models::Quote;
use crate::qotd::QuoteTranslator;
use crate::repos::{MockQuoteRepo, MockStatusRepo, Repos};
use crate::services::MockTranslator;
use crate::state::AppState;
use crate::stores::{MockCacheStore, Stores};

/// Creates a test configuration with dummy values.
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 3000,
        database_url: "postgres://test".to_string(),
        redis_url: None,
        default_lang: "en".to_string(),
        translate_url: None,
        translate_api_key: None,
        translate_timeout_ms: 3000,
        env: "test".to_string(),
        sentry_dsn: None,
    }
}

/// Creates a quote with a fixed author.
pub fn mock_quote(id: i32, text: &str, category_id: i32) -> Quote {
    Quote {
        id,
        text: text.to_string(),
        author: "Author".to_string(),
        category_id,
    }
}

/// Builder for constructing test `AppState` with custom mocks.
///
/// Uses default (empty) mocks for anything not explicitly set, so an
/// unexpected call fails the test.
#[derive(Default)]
pub struct TestStateBuilder {
    quote_repo: Option<MockQuoteRepo>,
    status_repo: Option<MockStatusRepo>,
    cache_store: Option<MockCacheStore>,
    translator: Option<MockTranslator>,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote_repo(mut self, repo: MockQuoteRepo) -> Self {
        self.quote_repo = Some(repo);
        self
    }

    pub fn with_status_repo(mut self, repo: MockStatusRepo) -> Self {
        self.status_repo = Some(repo);
        self
    }

    pub fn with_cache_store(mut self, store: MockCacheStore) -> Self {
        self.cache_store = Some(store);
        self
    }

    pub fn with_translator(mut self, translator: MockTranslator) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Builds the `AppState` using configured mocks or defaults.
    pub fn build(self) -> AppState {
        let config = test_config();

        let repos = Repos {
            quotes: Arc::new(self.quote_repo.unwrap_or_else(MockQuoteRepo::new)),
            status: Arc::new(self.status_repo.unwrap_or_else(MockStatusRepo::new)),
        };

        let stores = Stores {
            cache: Arc::new(self.cache_store.unwrap_or_else(MockCacheStore::new)),
        };

        let translator = QuoteTranslator::new(
            Arc::new(self.translator.unwrap_or_else(MockTranslator::new)),
            config.default_lang.clone(),
        );

        AppState::new(repos, stores, translator)
    }
}
