//! Translation service abstraction wrapping LibreTranslate.

use anyhow::Result;
use async_trait::async_trait;

use crate::translate;

/// Translation service trait. Implementations may fail; callers decide how
/// to degrade.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_lang` into `target_lang`.
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;
}

/// LibreTranslate implementation of Translator.
pub struct HttpTranslator {
    client: translate::Client,
}

impl HttpTranslator {
    pub fn new(client: translate::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let translated = self
            .client
            .translate(text, source_lang, target_lang)
            .await
            .map_err(|e| anyhow::anyhow!("Translation {source_lang}->{target_lang} failed: {e}"))?;

        Ok(translated)
    }
}

/// Used when no translation endpoint is configured. Every call fails, so
/// quotes are served in their stored language.
pub struct DisabledTranslator;

#[async_trait]
impl Translator for DisabledTranslator {
    async fn translate(
        &self,
        _text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String> {
        anyhow::bail!("translation not configured")
    }
}
