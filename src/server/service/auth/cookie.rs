//! Session token cookies.
//!
//! The access and refresh token of the current session are mirrored into two cookies so a
//! session survives across requests. Cookies are written through the response [`CookieJar`].

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::{Duration, OffsetDateTime};

use crate::server::model::auth::TokenPair;

/// Cookie holding the session access token
pub const ACCESS_TOKEN_COOKIE: &str = "whatsapp-access-token";
/// Cookie holding the session refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "whatsapp-refresh-token";

/// Max age of the token cookies, 100 years
pub const TOKEN_COOKIE_MAX_AGE_SECONDS: i64 = 100 * 365 * 24 * 60 * 60;

/// Same-site policy for cookies set on `host`.
///
/// Local development runs the app and the provider callback on different ports of
/// `localhost`, which needs `None`. Every other host uses `Lax`.
pub fn same_site_policy(host: &str) -> SameSite {
    if hostname(host) == "localhost" {
        SameSite::None
    } else {
        SameSite::Lax
    }
}

/// Writes both token cookies.
pub fn set_tokens_cookies(
    jar: CookieJar,
    host: &str,
    access_token: &str,
    refresh_token: &str,
) -> CookieJar {
    let same_site = same_site_policy(host);

    jar.add(token_cookie(
        ACCESS_TOKEN_COOKIE,
        access_token.to_string(),
        same_site,
    ))
    .add(token_cookie(
        REFRESH_TOKEN_COOKIE,
        refresh_token.to_string(),
        same_site,
    ))
}

/// Expires both token cookies.
pub fn clear_cookies(jar: CookieJar, host: &str) -> CookieJar {
    let same_site = same_site_policy(host);

    jar.add(expired_cookie(ACCESS_TOKEN_COOKIE, same_site))
        .add(expired_cookie(REFRESH_TOKEN_COOKIE, same_site))
}

/// Reads the token pair from the request cookies, `None` unless both are present and non-empty.
pub fn tokens_from_cookies(jar: &CookieJar) -> Option<TokenPair> {
    let value = |name: &str| {
        jar.get(name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    };

    Some(TokenPair {
        access_token: value(ACCESS_TOKEN_COOKIE)?,
        refresh_token: value(REFRESH_TOKEN_COOKIE)?,
    })
}

fn token_cookie(name: &'static str, value: String, same_site: SameSite) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .max_age(Duration::seconds(TOKEN_COOKIE_MAX_AGE_SECONDS))
        .same_site(same_site)
        .secure(true)
        .build()
}

fn expired_cookie(name: &'static str, same_site: SameSite) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .expires(OffsetDateTime::UNIX_EPOCH)
        .same_site(same_site)
        .secure(true)
        .build()
}

fn hostname(host: &str) -> &str {
    // Bracketed IPv6 literals keep their colons
    if host.starts_with('[') {
        return host.split_inclusive(']').next().unwrap_or(host);
    }

    host.split(':').next().unwrap_or(host)
}
