use axum::{
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
};

/// `302 Found` redirect to `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}
