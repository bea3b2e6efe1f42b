use thiserror::Error;

/// Failures inside quote-of-the-day resolution.
///
/// Only `Storage` raised by a random pick ever leaves `QuoteOfTheDay::resolve`.
/// Every other variant is logged where it happens and replaced by a fallback.
#[derive(Debug, Error)]
pub enum QotdError {
    #[error("storage error: {0:#}")]
    Storage(anyhow::Error),

    #[error("cache read failed for {key}: {error:#}")]
    CacheRead { key: String, error: anyhow::Error },

    #[error("cache write failed for {key}: {error:#}")]
    CacheWrite { key: String, error: anyhow::Error },

    #[error("translation failed: {0:#}")]
    Translation(anyhow::Error),

    #[error("cache entry {key} holds {value:?}, not a quote id")]
    CorruptEntry { key: String, value: String },
}
