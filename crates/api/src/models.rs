use serde::{Deserialize, Serialize};
use shared::api::QuoteResponse;
use sqlx::FromRow;

/// A stored quote. Rows are never mutated by this service.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Quote {
    pub id: i32,
    pub text: String,
    pub author: String,
    pub category_id: i32,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id,
            text: quote.text,
            author: quote.author,
            category_id: quote.category_id,
        }
    }
}
