use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum PhoneError {
    #[error("Area code and redirect phone number are required")]
    MissingRequiredFields,
    #[error("Area code must be between 11 and 99, got {0}")]
    InvalidAreaCode(i64),
    #[error("Redirect expiration must be an ISO-8601 date-time: {0}")]
    InvalidRedirectExpiration(String),
    #[error("SALVY_TOKEN environment variable is not set")]
    MissingToken,
    #[error("Failed to purchase phone number: {status} - {body}")]
    PurchaseFailed { status: u16, body: String },
}

impl IntoResponse for PhoneError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingRequiredFields
            | Self::InvalidAreaCode(_)
            | Self::InvalidRedirectExpiration(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::PurchaseFailed { .. } => {
                tracing::error!("{}", self);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Failed to purchase phone number".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::MissingToken => InternalServerError(self).into_response(),
        }
    }
}
