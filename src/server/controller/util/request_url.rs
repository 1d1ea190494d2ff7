use axum::{
    extract::FromRequestParts,
    http::{header::HOST, request::Parts},
};
use url::Url;

use crate::server::error::{auth::AuthError, Error};

/// Absolute URL of the current request, rebuilt from the `Host` header and the request URI.
///
/// The scheme is always `http`, a proxy's `x-forwarded-proto` is applied where it matters.
pub struct RequestUrl(pub Url);

impl<S> FromRequestParts<S> for RequestUrl
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .or_else(|| parts.uri.authority().map(|authority| authority.as_str()))
            .ok_or(AuthError::MissingHost)?;

        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|path_and_query| path_and_query.as_str())
            .unwrap_or("/");

        let url = Url::parse(&format!("http://{}{}", host, path_and_query))?;

        Ok(Self(url))
    }
}
