use axum::{body::Body, http::Method};
use mockito::Matcher;

use super::*;

fn signout(cookies: &[(&str, &str)]) -> axum::http::Request<Body> {
    request(Method::POST, "/api/auth/signout", cookies, Body::empty())
}

/// Asserts both token cookies are expired by `response`
fn assert_cookies_cleared(response: &axum::response::Response) {
    for name in [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE] {
        let cookie = set_cookie(response, name).unwrap();

        assert_eq!(cookie.value(), "");
        assert!(cookie.expires_datetime().unwrap() < time::OffsetDateTime::now_utc());
    }
}

#[tokio::test]
/// Expect the session to be revoked at the provider and the cookies to be cleared
async fn revokes_session_and_clears_cookies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/auth/v1/logout")
                .match_header(
                    "authorization",
                    Matcher::Exact(format!("Bearer {}", TEST_ACCESS_TOKEN)),
                )
                .with_status(204)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let response = test
        .app()
        .oneshot(signout(&signed_in_cookies()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/login"));
    assert_cookies_cleared(&response);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a local sign out without calling the provider when there is no session
async fn signs_out_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logout_endpoint(204, 0)
        .build()
        .await?;

    let response = test.app().oneshot(signout(&[])).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/login"));
    assert_cookies_cleared(&response);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the user to be signed out locally even when the provider fails
async fn clears_cookies_when_provider_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logout_endpoint(500, 1)
        .build()
        .await?;

    let response = test
        .app()
        .oneshot(signout(&signed_in_cookies()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/login"));
    assert_cookies_cleared(&response);
    test.assert_mocks();

    Ok(())
}
