//! Visitor identity for per-visitor quote tracking.
//!
//! Usage: add `Visitor` as an extractor parameter. It never rejects.
//!
//! ```ignore
//! async fn my_handler(visitor: Visitor, ...) -> ... {
//!     // visitor.id is the client address as seen through proxies
//! }
//! ```
//!
//! Resolution order: first `X-Forwarded-For` entry, `X-Real-IP`, the peer
//! socket address, then `"unknown"`. Headers are trusted as sent, so the
//! service is expected to sit behind a proxy that overwrites them.

use std::{convert::Infallible, net::SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};

const UNKNOWN_VISITOR: &str = "unknown";

/// Opaque visitor identifier, usually an IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visitor {
    pub id: String,
}

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        let id = from_headers(&parts.headers)
            .or(peer)
            .unwrap_or_else(|| UNKNOWN_VISITOR.to_string());

        Ok(Visitor { id })
    }
}

fn from_headers(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    forwarded.or_else(real_ip).map(str::to_string)
}
