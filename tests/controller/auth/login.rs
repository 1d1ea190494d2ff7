use axum::{body::Body, http::Method};

use super::*;

#[tokio::test]
/// Expect 200 with a Google authorize link carrying a PKCE challenge
async fn renders_login_page_with_provider_link() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = test.app().oneshot(get("/login", &[])).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Continue with Google"));
    assert!(body.contains(&format!("{}/auth/v1/authorize?provider=google", test.url())));
    assert!(body.contains("code_challenge_method=s256"));
    assert!(body.contains("redirect_to=http%3A%2F%2Fadmin.example.com%2Flogin%2Fsuccess"));

    Ok(())
}

#[tokio::test]
/// Expect the login page to start a server session holding the PKCE verifier
async fn starts_session_for_pending_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = test.app().oneshot(get("/login", &[])).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response, "id").is_some());

    Ok(())
}

#[tokio::test]
/// Expect the return URL to be forwarded through the callback URL
async fn forwards_return_url_to_callback() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = test
        .app()
        .oneshot(get("/login?returnUrl=%2Fclients%3Fpage%3D2", &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("returnUrl%3D%252Fclients%253Fpage%253D2"));

    Ok(())
}

#[tokio::test]
/// Expect the login page to also answer POST requests
async fn answers_post_requests() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = test
        .app()
        .oneshot(request(Method::POST, "/login", &[], Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the request carries no host to build the callback URL from
async fn rejects_request_without_host() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = axum::http::Request::builder()
        .uri("/login")
        .body(Body::empty())
        .unwrap();
    let response = test.app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
