use std::sync::Arc;

use crate::{models::Quote, repos::QuoteRepo};

use super::QotdError;

/// Uniform random selection over stored quotes.
#[derive(Clone)]
pub struct RandomPicker {
    quotes: Arc<dyn QuoteRepo>,
}

impl RandomPicker {
    pub fn new(quotes: Arc<dyn QuoteRepo>) -> Self {
        Self { quotes }
    }

    /// Returns None when no quote matches. Storage errors are returned as-is
    /// and are fatal for the request.
    pub async fn pick_random(&self, category_id: Option<i32>) -> Result<Option<Quote>, QotdError> {
        self.quotes
            .pick_random(category_id)
            .await
            .map_err(QotdError::Storage)
    }
}
