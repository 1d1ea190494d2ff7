use axum::http::StatusCode;
use tower::ServiceExt;
use whatsapp_admin::server::service::auth::cookie::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use whatsapp_admin_test_utils::prelude::*;

use crate::util::{test_utils::*, TestContextExt};

#[tokio::test]
/// Expect anonymous dashboard requests to be sent to login with the path as return URL
async fn redirects_anonymous_request_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = test.app().oneshot(get("/dashboard", &[])).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/login?returnUrl=%2Fdashboard"));

    Ok(())
}

#[tokio::test]
/// Expect the query string to be kept in the return URL
async fn keeps_query_in_return_url() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = test
        .app()
        .oneshot(get("/clients/new?template=welcome", &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        location(&response),
        Some("/login?returnUrl=%2Fclients%2Fnew%3Ftemplate%3Dwelcome")
    );

    Ok(())
}

#[tokio::test]
/// Expect rejected cookie tokens to be treated as anonymous
async fn redirects_when_tokens_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rejected_user_endpoint(TEST_ACCESS_TOKEN, 1)
        .build()
        .await?;

    let cookies = [
        (ACCESS_TOKEN_COOKIE, TEST_ACCESS_TOKEN),
        (REFRESH_TOKEN_COOKIE, TEST_REFRESH_TOKEN),
    ];
    let response = test
        .app()
        .oneshot(get("/dashboard", &cookies))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/login?returnUrl=%2Fdashboard"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect signed in requests to pass the guard
async fn passes_signed_in_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_endpoint(TEST_ACCESS_TOKEN, 1)
        .build()
        .await?;

    let cookies = [
        (ACCESS_TOKEN_COOKIE, TEST_ACCESS_TOKEN),
        (REFRESH_TOKEN_COOKIE, TEST_REFRESH_TOKEN),
    ];
    let response = test
        .app()
        .oneshot(get("/dashboard", &cookies))
        .await
        .unwrap();

    // Only server routes are mounted here, the page itself is rendered by the client app
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect unprotected routes to pass without any provider call
async fn ignores_unprotected_routes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_endpoint(TEST_ACCESS_TOKEN, 0)
        .build()
        .await?;

    let response = test.app().oneshot(get("/login", &[])).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failing provider to surface as a 500 instead of a login redirect
async fn fails_when_provider_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/auth/v1/user")
                .with_status(500)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message":"internal error"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let cookies = [
        (ACCESS_TOKEN_COOKIE, TEST_ACCESS_TOKEN),
        (REFRESH_TOKEN_COOKIE, TEST_REFRESH_TOKEN),
    ];
    let response = test
        .app()
        .oneshot(get("/dashboard", &cookies))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(location(&response).is_none());
    test.assert_mocks();

    Ok(())
}
