use serde_json::Value;
use whatsapp_admin::model::user::UserDto;

use super::*;

#[tokio::test]
/// Expect 200 with the user belonging to the cookie tokens
async fn returns_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_endpoint(TEST_ACCESS_TOKEN, 1)
        .build()
        .await?;

    let response = test
        .app()
        .oneshot(get("/api/auth/user", &signed_in_cookies()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response, ACCESS_TOKEN_COOKIE).is_none());
    let user: UserDto = serde_json::from_str(&body_string(response).await)?;
    assert_eq!(user.id, TEST_USER_ID);
    assert_eq!(user.email.as_deref(), Some(TEST_USER_EMAIL));
    assert_eq!(user.display_name(), TEST_USER_FULL_NAME);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 without contacting the provider when no token cookies are sent
async fn returns_unauthorized_without_cookies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_endpoint(TEST_ACCESS_TOKEN, 0)
        .build()
        .await?;

    let response = test
        .app()
        .oneshot(get("/api/auth/user", &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_str(&body_string(response).await)?;
    assert!(body["error"].is_string());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an expired access token to be refreshed once and the new tokens written
async fn refreshes_expired_access_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rejected_user_endpoint(TEST_ACCESS_TOKEN, 1)
        .with_token_endpoint("refresh_token", "new-access-token", "new-refresh-token", 1)
        .build()
        .await?;

    let response = test
        .app()
        .oneshot(get("/api/auth/user", &signed_in_cookies()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let access = set_cookie(&response, ACCESS_TOKEN_COOKIE).unwrap();
    let refresh = set_cookie(&response, REFRESH_TOKEN_COOKIE).unwrap();
    assert_eq!(access.value(), "new-access-token");
    assert_eq!(refresh.value(), "new-refresh-token");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 when both the access token and the refresh token are rejected
async fn returns_unauthorized_when_refresh_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rejected_user_endpoint(TEST_ACCESS_TOKEN, 1)
        .with_rejected_token_endpoint("refresh_token", 1)
        .build()
        .await?;

    let response = test
        .app()
        .oneshot(get("/api/auth/user", &signed_in_cookies()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}
