//! External service abstractions.
//!
//! Each service is abstracted behind a trait to enable mocking in tests.
//!
//! ## Services
//!
//! - **translation** - Quote text translation via LibreTranslate, or a
//!   disabled stand-in when no endpoint is configured
//!
//! ## Usage in Handlers
//!
//! Handlers never call a `Translator` directly. They go through the
//! best-effort `QuoteTranslator` on `AppState`:
//!
//! ```ignore
//! let quote = state.translator.localize(quote, Some("de")).await;
//! ```

mod translation;

pub use translation::{DisabledTranslator, HttpTranslator, Translator};

#[cfg(test)]
pub use translation::MockTranslator;
