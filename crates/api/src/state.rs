use std::sync::Arc;

use crate::{
    qotd::{QuoteOfTheDay, QuoteTranslator},
    repos::Repos,
    stores::Stores,
};

#[derive(Clone)]
pub struct AppState {
    /// Database repositories.
    pub repos: Repos,
    /// Ephemeral stores (Redis or in-process).
    pub stores: Stores,
    /// Best-effort quote translation.
    pub translator: QuoteTranslator,
    /// Daily quote resolution, built over the same repos and stores.
    pub qotd: Arc<QuoteOfTheDay>,
}

impl AppState {
    pub fn new(repos: Repos, stores: Stores, translator: QuoteTranslator) -> Self {
        let qotd = Arc::new(QuoteOfTheDay::new(
            repos.quotes.clone(),
            stores.cache.clone(),
            translator.clone(),
        ));

        Self {
            repos,
            stores,
            translator,
            qotd,
        }
    }
}
