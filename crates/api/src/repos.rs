//! Database repositories (PostgreSQL).
//!
//! Each repository is abstracted behind a trait to enable mocking in tests.
//! This service only reads quotes; rows are managed elsewhere.
//!
//! ## Repositories
//!
//! - **quotes** - Random selection and lookup by id
//! - **status** - Connectivity checks for `/health`
//!
//! ## Usage in Handlers
//!
//! Repositories are accessed via `state.repos`:
//!
//! ```ignore
//! async fn handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
//!     let quote = state.repos.quotes.find_by_id(id).await?;
//! }
//! ```

mod quotes;
mod status;

pub use quotes::{PgQuoteRepo, QuoteRepo};
pub use status::{PgStatusRepo, StatusRepo};

#[cfg(test)]
pub use quotes::MockQuoteRepo;
#[cfg(test)]
pub use status::MockStatusRepo;

use std::sync::Arc;

/// Collection of all database repositories.
#[derive(Clone)]
pub struct Repos {
    pub quotes: Arc<dyn QuoteRepo>,
    pub status: Arc<dyn StatusRepo>,
}
