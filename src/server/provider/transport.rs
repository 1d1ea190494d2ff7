use reqwest::{header::CACHE_CONTROL, Method, RequestBuilder};

use crate::server::error::Error;

/// User agent sent with every outbound request
pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// URL segment of the provider's storage API
pub const STORAGE_PATH_SEGMENT: &str = "storage";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CacheMode {
    Default,
    NoStore,
}

/// HTTP transport used by auth clients.
///
/// The server transport marks every request `Cache-Control: no-store` so no intermediary
/// caches per-user auth responses. Storage requests are passed through unmodified.
#[derive(Clone, Debug)]
pub struct Transport {
    http: reqwest::Client,
    cache: CacheMode,
}

impl Transport {
    /// Transport that leaves requests as built.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            http: build_http_client()?,
            cache: CacheMode::Default,
        })
    }

    /// Transport for server-context clients.
    pub fn no_store() -> Result<Self, Error> {
        Ok(Self {
            http: build_http_client()?,
            cache: CacheMode::NoStore,
        })
    }

    /// Starts a request to `url`.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self.http.request(method, url);

        if self.cache == CacheMode::NoStore && !url.contains(STORAGE_PATH_SEGMENT) {
            request.header(CACHE_CONTROL, "no-store")
        } else {
            request
        }
    }
}

fn build_http_client() -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder()
        .user_agent(APP_USER_AGENT)
        .build()?)
}
