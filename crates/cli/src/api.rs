//! HTTP client for the quote API.

use anyhow::Result;
use reqwest::{Client, Response};
use shared::api::{LangQuery, QuoteQuery, QuoteResponse};

pub struct Api {
    pub http: Client,
    pub base_url: String,
}

impl Api {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the quote of the day. Repeat calls on the same day return
    /// random quotes.
    pub async fn today(&self, query: &QuoteQuery) -> Result<QuoteResponse> {
        let response = Self::check_response(
            self.http
                .get(format!("{}/quotes/today", self.base_url))
                .query(query)
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    /// Fetches a random quote, optionally from one category.
    pub async fn random(&self, query: &QuoteQuery) -> Result<QuoteResponse> {
        let response = Self::check_response(
            self.http
                .get(format!("{}/quotes/random", self.base_url))
                .query(query)
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    /// Fetches a specific quote by id.
    pub async fn get_quote(&self, id: i32, query: &LangQuery) -> Result<QuoteResponse> {
        let response = Self::check_response(
            self.http
                .get(format!("{}/quotes/{}", self.base_url, id))
                .query(query)
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    async fn check_response(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            // Try to extract error message from JSON response
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|json| {
                    json.get("error")
                        .or_else(|| json.get("message"))
                        .and_then(|v| v.as_str())
                        .map(|s| s.to_string())
                })
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("Request failed")
                            .to_string()
                    } else {
                        body
                    }
                });

            anyhow::bail!("{}", message);
        }

        Ok(response)
    }
}
