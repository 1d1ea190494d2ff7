//! Login redirect targets.
//!
//! The page a visitor wanted travels through the login flow as a single `returnUrl` query
//! parameter: route guard → `/login` → provider → `/login/success` → original page. It is
//! encoded once when added and decoded once when read, never nested.

use axum::http::HeaderMap;
use url::{form_urlencoded, Url};

use crate::server::error::Error;

/// Query parameter carrying the post-login destination
pub const RETURN_URL_QUERY_PARAM: &str = "returnUrl";
/// Path of the login page
pub const LOGIN_PATH: &str = "/login";
/// Path the provider redirects back to after authenticating
pub const SUCCESS_LOGIN_PATH: &str = "/login/success";
/// Destination after login when no usable return URL was given
pub const DEFAULT_RETURN_URL: &str = "/dashboard";

/// Hosts outside this app that may receive the visitor after login
pub const ALLOWED_REDIRECT_HOSTS: [&str; 5] = [
    "webdraw.ai",
    "webdraw.com",
    "localhost",
    "deco.site",
    "deco.chat",
];

const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// Encodes the return URL of `url` as a query string.
///
/// Uses the existing `returnUrl` parameter when present, otherwise the full `url`.
pub fn return_url_search_params(url: &Url) -> String {
    let return_url = query_param(url, RETURN_URL_QUERY_PARAM).unwrap_or_else(|| url.to_string());

    form_urlencoded::Serializer::new(String::new())
        .append_pair(RETURN_URL_QUERY_PARAM, &return_url)
        .finish()
}

/// Computes where the provider should send the visitor after authenticating.
///
/// An allow-listed cross-host return URL is returned as is. Anything else goes through this
/// app's success page, carrying the return URL along.
///
/// # Arguments
/// - `url`: Full URL of the current request
/// - `headers`: Request headers, `x-forwarded-proto` overrides the scheme of `url`
pub fn compute_callback_url(url: &Url, headers: &HeaderMap) -> Result<String, Error> {
    let protocol = headers
        .get(FORWARDED_PROTO_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|proto| format!("{}:", proto))
        .unwrap_or_else(|| format!("{}:", url.scheme()));

    let requested = query_param(url, RETURN_URL_QUERY_PARAM).unwrap_or_else(|| "/".to_string());
    let return_url = url.join(&requested)?;

    if is_allowed_cross_host(url, &return_url) {
        return Ok(return_url.to_string());
    }

    Ok(format!(
        "{}//{}{}?{}",
        protocol,
        host_with_port(url),
        SUCCESS_LOGIN_PATH,
        return_url_search_params(url)
    ))
}

/// Login page location that returns to `path` (and `query`) afterwards.
pub fn login_location(path: &str, query: Option<&str>) -> String {
    let return_url = match query {
        Some(query) if !query.is_empty() => format!("{}?{}", path, query),
        _ => path.to_string(),
    };

    let search = form_urlencoded::Serializer::new(String::new())
        .append_pair(RETURN_URL_QUERY_PARAM, &return_url)
        .finish();

    format!("{}?{}", LOGIN_PATH, search)
}

/// Final destination on the success page.
///
/// Same-host targets are reduced to their path so the redirect stays on this origin. Targets
/// on an allow-listed host are kept whole. Missing, unparsable, foreign or login page targets
/// fall back to [`DEFAULT_RETURN_URL`].
pub fn resolve_return_url(current: &Url, return_url: Option<&str>) -> String {
    let Some(return_url) = return_url.filter(|value| !value.is_empty()) else {
        return DEFAULT_RETURN_URL.to_string();
    };

    let Ok(target) = current.join(return_url) else {
        return DEFAULT_RETURN_URL.to_string();
    };

    if host_with_port(&target) == host_with_port(current) {
        let path = target.path();

        // A path starting with `//` would be followed as a scheme-relative URL to another host
        if path.starts_with("//") || path.starts_with("/\\") || is_login_path(path) {
            return DEFAULT_RETURN_URL.to_string();
        }

        return match target.query() {
            Some(query) => format!("{}?{}", target.path(), query),
            None => target.path().to_string(),
        };
    }

    if is_allowed_cross_host(current, &target) {
        return target.to_string();
    }

    DEFAULT_RETURN_URL.to_string()
}

fn is_login_path(path: &str) -> bool {
    path == LOGIN_PATH || path.starts_with(&format!("{}/", LOGIN_PATH))
}

/// Host of `url` including a non-default port.
pub fn host_with_port(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        _ => String::new(),
    }
}

fn is_allowed_cross_host(current: &Url, target: &Url) -> bool {
    host_with_port(target) != host_with_port(current)
        && target
            .host_str()
            .is_some_and(|host| ALLOWED_REDIRECT_HOSTS.contains(&host))
}

fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
