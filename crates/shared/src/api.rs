//! Shared API request/response types used by both CLI and API server.

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Longest language tag accepted in a query (e.g. "zh-Hant").
const MAX_LANG_LEN: usize = 10;

/// A quote as returned by every quote endpoint.
///
/// `text` may have been translated into the requested language. When
/// translation is unavailable the stored text is returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub id: i32,
    pub text: String,
    pub author: String,
    pub category_id: i32,
}

/// Query for the quote-of-the-day and random endpoints.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteQuery {
    /// Restrict to one category. Category requests never share the daily quote.
    #[garde(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    /// Target language for the quote text.
    #[garde(ascii, length(min = 2, max = MAX_LANG_LEN))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// Query for endpoints that only accept a language.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct LangQuery {
    #[garde(ascii, length(min = 2, max = MAX_LANG_LEN))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// Health endpoint body.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: bool,
    pub cache: bool,
}
