//! Error types for the admin panel server.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (configuration, authentication, the auth provider, phone purchases). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions.

pub mod auth;
pub mod config;
pub mod phone;
pub mod provider;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, phone::PhoneError, provider::ProviderError,
    },
};

/// Main error type for the server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// type. `#[from]` conversions allow the `?` operator across the codebase, and the
/// `IntoResponse` implementation maps each error to an HTTP response.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (missing session, PKCE state, request host)
/// - Provider errors (non-success responses from the auth provider)
/// - Phone purchase errors (validation, credentials, upstream failures)
/// - External library errors (HTTP client, URL parsing, JWT signing, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing session, PKCE verifier, request host).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Auth provider returned a non-success status.
    #[error(transparent)]
    ProviderError(#[from] ProviderError),
    /// Virtual phone number purchase error.
    #[error(transparent)]
    PhoneError(#[from] PhoneError),
    /// Outbound HTTP request failed before a response was received.
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// URL could not be parsed.
    #[error(transparent)]
    UrlError(#[from] url::ParseError),
    /// JWT signing error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid phone purchase input or missing request host
/// - 401 Unauthorized - No session for an endpoint that requires one
/// - 502 Bad Gateway - Phone provider rejected the purchase
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ProviderError(err) => err.into_response(),
            Self::PhoneError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
