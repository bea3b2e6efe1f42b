//! Quote endpoints.
//!
//! Endpoints:
//! - GET /quotes/today - Quote of the day for the calling visitor
//! - GET /quotes/random - Random quote, optionally from one category
//! - GET /quotes/{id} - A specific quote
//!
//! All endpoints accept `lang` to translate the quote text. Translation is
//! best-effort: the stored text is returned when it fails.

use axum::{
    Json, Router, debug_handler,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use garde::Validate;
use shared::api::{LangQuery, QuoteQuery, QuoteResponse};

use crate::{error::AppError, middleware::visitor::Visitor, qotd::QuoteOptions, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/today", get(quote_of_the_day))
        .route("/random", get(random_quote))
        .route("/{id}", get(get_quote))
}

/// The first request of the day returns the shared daily quote, later ones a
/// random quote. Category requests are always random.
#[debug_handler]
async fn quote_of_the_day(
    visitor: Visitor,
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
) -> Result<impl IntoResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let options = QuoteOptions {
        category_id: query.category_id,
        lang: query.lang,
    };

    let quote = state
        .qotd
        .resolve(&visitor.id, &options)
        .await?
        .ok_or(AppError::External(StatusCode::NOT_FOUND, "No quote found"))?;

    tracing::debug!(visitor_id = %visitor.id, quote_id = quote.id, "quote of the day served");

    Ok(Json(QuoteResponse::from(quote)))
}

#[debug_handler]
async fn random_quote(
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
) -> Result<impl IntoResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let quote = state
        .qotd
        .random(query.category_id, query.lang.as_deref())
        .await?
        .ok_or(AppError::External(StatusCode::NOT_FOUND, "No quote found"))?;

    Ok(Json(QuoteResponse::from(quote)))
}

#[debug_handler]
async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<LangQuery>,
) -> Result<impl IntoResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let quote = state
        .repos
        .quotes
        .find_by_id(id)
        .await?
        .ok_or(AppError::External(StatusCode::NOT_FOUND, "Quote not found"))?;

    let quote = state
        .translator
        .localize(quote, query.lang.as_deref())
        .await;

    Ok(Json(QuoteResponse::from(quote)))
}
