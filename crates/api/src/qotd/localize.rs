//! Best-effort translation of quote text.
//!
//! Quotes are stored in the configured default language. A translation
//! failure never fails a request: the stored text is served instead.

use std::sync::Arc;

use crate::{models::Quote, services::Translator};

use super::QotdError;

#[derive(Clone)]
pub struct QuoteTranslator {
    translator: Arc<dyn Translator>,
    default_lang: String,
}

impl QuoteTranslator {
    pub fn new(translator: Arc<dyn Translator>, default_lang: impl Into<String>) -> Self {
        Self {
            translator,
            default_lang: default_lang.into(),
        }
    }

    fn is_noop(&self, source_lang: &str, target_lang: &str) -> bool {
        target_lang.eq_ignore_ascii_case(source_lang)
            || target_lang.eq_ignore_ascii_case(&self.default_lang)
    }

    /// Translate or report why not. Returns `text` untouched without calling
    /// out when no translation is needed.
    pub async fn try_translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, QotdError> {
        if self.is_noop(source_lang, target_lang) {
            return Ok(text.to_string());
        }

        let translated = self
            .translator
            .translate(text, source_lang, target_lang)
            .await
            .map_err(QotdError::Translation)?;

        if translated.trim().is_empty() {
            return Err(QotdError::Translation(anyhow::anyhow!(
                "empty translation returned"
            )));
        }

        Ok(translated)
    }

    /// Translate, falling back to the original text on any failure.
    pub async fn translate_text(&self, text: &str, source_lang: &str, target_lang: &str) -> String {
        match self.try_translate(text, source_lang, target_lang).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(
                    source_lang = %source_lang,
                    target_lang = %target_lang,
                    error = %e,
                    "serving untranslated text"
                );
                text.to_string()
            }
        }
    }

    /// Return the quote with its text in `lang`, when one is requested.
    pub async fn localize(&self, mut quote: Quote, lang: Option<&str>) -> Quote {
        if let Some(lang) = lang {
            quote.text = self
                .translate_text(&quote.text, &self.default_lang, lang)
                .await;
        }
        quote
    }
}
