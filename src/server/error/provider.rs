use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Non-success responses from the auth provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider refused the credentials (4xx), e.g. an expired access token or an
    /// already used authorization code.
    #[error("Auth provider rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    /// The provider failed to process the request (5xx or unexpected status).
    #[error("Auth provider returned unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl ProviderError {
    /// Classifies a non-success status code returned by the provider.
    pub fn from_status(status: u16, body: String) -> Self {
        if (400..500).contains(&status) {
            Self::Rejected { status, body }
        } else {
            Self::UnexpectedStatus { status, body }
        }
    }
}

impl IntoResponse for ProviderError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
