//! Quote repository for PostgreSQL.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::models::Quote;

/// Repository for reading quotes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteRepo: Send + Sync {
    /// Pick one quote uniformly at random, optionally within a category.
    /// Returns None if no quote matches.
    async fn pick_random(&self, category_id: Option<i32>) -> Result<Option<Quote>>;

    /// Find a quote by ID.
    async fn find_by_id(&self, id: i32) -> Result<Option<Quote>>;
}

/// PostgreSQL implementation of QuoteRepo.
#[derive(Clone)]
pub struct PgQuoteRepo {
    pool: Pool<Postgres>,
}

impl PgQuoteRepo {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteRepo for PgQuoteRepo {
    async fn pick_random(&self, category_id: Option<i32>) -> Result<Option<Quote>> {
        let quote = sqlx::query_as::<_, Quote>(
            r#"
            SELECT id, text, author, category_id
            FROM quotes
            WHERE $1::INTEGER IS NULL OR category_id = $1
            ORDER BY random()
            LIMIT 1
            "#,
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(quote)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Quote>> {
        let quote = sqlx::query_as::<_, Quote>(
            "SELECT id, text, author, category_id FROM quotes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(quote)
    }
}
