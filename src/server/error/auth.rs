use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No session tokens present in request cookies")]
    SessionMissing,
    #[error("Failed to complete login due to PKCE verifier missing from session")]
    PkceMissingValue,
    #[error("Request has no Host header to build the request URL from")]
    MissingHost,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::SessionMissing => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not signed in".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::MissingHost => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Missing Host header".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::PkceMissingValue => InternalServerError(self).into_response(),
        }
    }
}
