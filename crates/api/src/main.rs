mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod qotd;
mod repos;
mod services;
mod state;
mod stores;
#[cfg(test)]
mod test_utils;
mod translate;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::{Result, anyhow};
use axum::{Router, http};
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::Config,
    qotd::QuoteTranslator,
    repos::{PgQuoteRepo, PgStatusRepo, Repos},
    services::{DisabledTranslator, HttpTranslator, Translator},
    state::AppState,
    stores::{CacheStore, MemoryCacheStore, RedisCacheStore, Stores},
};

#[derive(Parser)]
#[command(name = "qotd-api")]
#[command(about = "Quote of the day API server")]
struct Args {
    /// Run database migrations and exit
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install rustls crypto provider before any TLS operations
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("failed to install rustls crypto provider"))?;

    let args = Args::parse();
    let config = envy::prefixed("QOTD_").from_env::<Config>()?;

    // Guard must stay alive for the lifetime of the process
    let _sentry_guard = config.sentry_dsn.as_ref().map(|dsn| {
        sentry::init((
            dsn.as_str(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.env.clone().into()),
                ..Default::default()
            },
        ))
    });

    // JSON in production, human-readable otherwise
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .init();
    }

    let database = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    if args.migrate {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&database).await?;
        tracing::info!("Migrations complete");
        return Ok(());
    }

    let repos = Repos {
        quotes: Arc::new(PgQuoteRepo::new(database.clone())),
        status: Arc::new(PgStatusRepo::new(database)),
    };

    let cache: Arc<dyn CacheStore> = match config.redis_url.as_deref() {
        Some(url) => Arc::new(RedisCacheStore::new(redis::Client::open(url)?)),
        None => {
            tracing::warn!("QOTD_REDIS_URL not set, using single-instance in-process cache");
            Arc::new(MemoryCacheStore::new())
        }
    };
    let stores = Stores { cache };

    let backend: Arc<dyn Translator> = match config.translate_url.as_deref() {
        Some(url) => {
            let client = translate::Client::new(
                url,
                config.translate_api_key.clone(),
                Duration::from_millis(config.translate_timeout_ms),
            )?;
            tracing::info!(url = %url, "translation enabled");
            Arc::new(HttpTranslator::new(client))
        }
        None => {
            tracing::info!("QOTD_TRANSLATE_URL not set, quotes are served untranslated");
            Arc::new(DisabledTranslator)
        }
    };
    let translator = QuoteTranslator::new(backend, config.default_lang.clone());

    let state = AppState::new(repos, stores, translator);

    // Request ID header name
    let x_request_id = http::HeaderName::from_static("x-request-id");

    let app = Router::new()
        .nest("/health", handlers::health::router())
        .nest("/quotes", handlers::quotes::router())
        .with_state(state)
        // Request ID: generate UUID, include in logs, return in response
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &http::Request<axum::body::Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            },
        ))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(64 * 1024)); // only GET routes

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);

    // Peer address is the last-resort visitor id
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
