//! Readiness of the quote database.
//!
//! A plain connection check passes against an empty or unmigrated database,
//! which would then answer every quote request with 500. The probe reads the
//! `quotes` table instead, so `/health` fails until migrations have run.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

/// Succeeds only once the `quotes` table exists. The result says whether any
/// quotes are stored; an empty table is still healthy.
const QUOTES_READY_QUERY: &str = "SELECT EXISTS (SELECT 1 FROM quotes)";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepo: Send + Sync {
    /// True when the database is reachable and the quote schema is in place.
    async fn health_check(&self) -> Result<bool>;
}

#[derive(Clone)]
pub struct PgStatusRepo {
    pool: Pool<Postgres>,
}

impl PgStatusRepo {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepo for PgStatusRepo {
    async fn health_check(&self) -> Result<bool> {
        let has_quotes: bool = sqlx::query_scalar(QUOTES_READY_QUERY)
            .fetch_one(&self.pool)
            .await
            .context("quotes table is not readable")?;

        if !has_quotes {
            tracing::warn!("quotes table is empty, quote endpoints will return 404");
        }

        Ok(true)
    }
}
