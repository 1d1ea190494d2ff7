use axum::Router;
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Opens the login page and returns the session cookie holding the PKCE verifier
async fn start_login(app: &Router) -> String {
    let response = app.clone().oneshot(get("/login", &[])).await.unwrap();

    set_cookie(&response, "id")
        .expect("Login page did not start a session")
        .value()
        .to_string()
}

#[tokio::test]
/// Expect 302 to the return URL with the session tokens written to cookies
async fn signs_in_and_redirects_to_return_url() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/auth/v1/token")
                .match_query(Matcher::UrlEncoded("grant_type".into(), "pkce".into()))
                .match_body(Matcher::PartialJson(json!({ "auth_code": TEST_AUTH_CODE })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(session_json(TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let app = test.app();
    let session_id = start_login(&app).await;

    let uri = format!(
        "/login/success?code={}&returnUrl=%2Fclients%3Fpage%3D2",
        TEST_AUTH_CODE
    );
    let response = app
        .oneshot(get(&uri, &[("id", &session_id)]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/clients?page=2"));
    let access = set_cookie(&response, ACCESS_TOKEN_COOKIE).unwrap();
    let refresh = set_cookie(&response, REFRESH_TOKEN_COOKIE).unwrap();
    assert_eq!(access.value(), TEST_ACCESS_TOKEN);
    assert_eq!(refresh.value(), TEST_REFRESH_TOKEN);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the dashboard as destination when no return URL is given
async fn defaults_to_dashboard() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint("pkce", TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN, 1)
        .build()
        .await?;
    let app = test.app();
    let session_id = start_login(&app).await;

    let uri = format!("/login/success?code={}", TEST_AUTH_CODE);
    let response = app
        .oneshot(get(&uri, &[("id", &session_id)]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/dashboard"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a return URL on an unknown host to be replaced by the dashboard
async fn ignores_foreign_return_url() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint("pkce", TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN, 1)
        .build()
        .await?;
    let app = test.app();
    let session_id = start_login(&app).await;

    let uri = format!(
        "/login/success?code={}&returnUrl=https%3A%2F%2Fevil.example.net%2Fsteal",
        TEST_AUTH_CODE
    );
    let response = app
        .oneshot(get(&uri, &[("id", &session_id)]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/dashboard"));

    Ok(())
}

#[tokio::test]
/// Expect the same path under the wildcard callback route
async fn accepts_wildcard_callback_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint("pkce", TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN, 1)
        .build()
        .await?;
    let app = test.app();
    let session_id = start_login(&app).await;

    let uri = format!("/login/success/anything?code={}", TEST_AUTH_CODE);
    let response = app
        .oneshot(get(&uri, &[("id", &session_id)]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/dashboard"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 302 to login without calling the provider when the code is missing
async fn redirects_to_login_without_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint("pkce", TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN, 0)
        .build()
        .await?;
    let app = test.app();
    let session_id = start_login(&app).await;

    let response = app
        .oneshot(get(
            "/login/success?error_description=access_denied",
            &[("id", &session_id)],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/login"));
    assert!(set_cookie(&response, ACCESS_TOKEN_COOKIE).is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 302 to login when the callback arrives without a pending login
async fn redirects_to_login_without_pending_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint("pkce", TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN, 0)
        .build()
        .await?;

    let uri = format!("/login/success?code={}", TEST_AUTH_CODE);
    let response = test.app().oneshot(get(&uri, &[])).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/login"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 302 to login without token cookies when the provider rejects the code
async fn redirects_to_login_when_code_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rejected_token_endpoint("pkce", 1)
        .build()
        .await?;
    let app = test.app();
    let session_id = start_login(&app).await;

    let uri = format!("/login/success?code={}", TEST_AUTH_CODE);
    let response = app
        .oneshot(get(&uri, &[("id", &session_id)]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/login"));
    assert!(set_cookie(&response, ACCESS_TOKEN_COOKIE).is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a replayed callback to be sent to login since the verifier was consumed
async fn consumes_pending_login_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint("pkce", TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN, 1)
        .build()
        .await?;
    let app = test.app();
    let session_id = start_login(&app).await;
    let uri = format!("/login/success?code={}", TEST_AUTH_CODE);

    let first = app
        .clone()
        .oneshot(get(&uri, &[("id", &session_id)]))
        .await
        .unwrap();
    let second = app
        .oneshot(get(&uri, &[("id", &session_id)]))
        .await
        .unwrap();

    assert_eq!(location(&first), Some("/dashboard"));
    assert_eq!(location(&second), Some("/login"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a same-host return URL with a `//` path to be replaced by the dashboard
async fn ignores_scheme_relative_return_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint("pkce", TEST_ACCESS_TOKEN, TEST_REFRESH_TOKEN, 1)
        .build()
        .await?;
    let app = test.app();
    let session_id = start_login(&app).await;

    let uri = format!(
        "/login/success?code={}&returnUrl=http%3A%2F%2Fadmin.example.com%2F%2Fevil.example%2Fsteal",
        TEST_AUTH_CODE
    );
    let response = app
        .oneshot(get(&uri, &[("id", &session_id)]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/dashboard"));
    test.assert_mocks();

    Ok(())
}
