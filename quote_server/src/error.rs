//! Error types used across the quote server crate.
//!
//! `ServerError` covers every failure branch of the quote handler plus the
//! startup failures (datastore, listener). It implements axum's `IntoResponse`
//! so handlers can propagate it with `?`: the cause is logged and the caller
//! receives a short plain-text reason with the matching status code.
//!
//! Status mapping:
//! - request construction, decode and validation failures → `500`
//! - upstream transport failures and missed deadlines → `504`
use std::io;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use quote_common::net::QUOTE_PATH;
use thiserror::Error;

/// Unified error type for the quote handler, the store and server startup.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The upstream request could not be built (invalid URL and the like).
    #[error("failed to build upstream request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    /// Connecting to or reading from the upstream failed.
    #[error("upstream call failed: {0}")]
    UpstreamUnavailable(#[source] reqwest::Error),

    /// The upstream did not answer within the request deadline.
    #[error("upstream call exceeded {0:?}")]
    UpstreamTimeout(Duration),

    /// The upstream body is not the expected `{"USDBRL": {...}}` document.
    #[error("failed to decode upstream body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The upstream document carried an empty or missing bid.
    #[error("upstream returned an empty bid")]
    InvalidQuote,

    /// Datastore failure (open, schema init, insert).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Socket I/O error (listener bind, serve loop).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ServerError {
    /// HTTP status reported to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UpstreamUnavailable(_) | ServerError::UpstreamTimeout(_) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short reason sent as the response body.
    pub fn reason(&self) -> &'static str {
        match self {
            ServerError::RequestBuild(_) => "Erro ao criar requisição externa",
            ServerError::UpstreamUnavailable(_) | ServerError::UpstreamTimeout(_) => {
                "Erro ao obter cotação"
            }
            ServerError::Decode(_) => "Erro ao decodificar resposta",
            ServerError::InvalidQuote => "Cotação inválida",
            ServerError::Database(_) | ServerError::Io(_) => "Erro interno",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!("GET {} failed with {}: {}", QUOTE_PATH, status, self);
        (status, self.reason()).into_response()
    }
}
