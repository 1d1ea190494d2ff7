//! Test utilities for driving the server routes against the mock providers

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{COOKIE, HOST, LOCATION, SET_COOKIE},
        Method, Request,
    },
    middleware,
    response::Response,
    Router,
};
use axum_extra::extract::cookie::Cookie;
use whatsapp_admin::server::{
    config::Config, middleware::route_guard::route_guard, model::app::AppState, router,
    startup::build_session_layer,
};
use whatsapp_admin_test_utils::prelude::*;

/// Extension trait for TestContext to build the application against its mock server
pub trait TestContextExt {
    fn config(&self) -> Config;
    fn app_state(&self) -> AppState;
    fn app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn config(&self) -> Config {
        Config {
            supabase_url: self.url(),
            supabase_anon_key: TEST_ANON_KEY.to_string(),
            supabase_service_key: Some(TEST_SERVICE_KEY.to_string()),
            supabase_jwt_secret: Some(TEST_JWT_SECRET.to_string()),
            salvy_token: Some(TEST_SALVY_TOKEN.to_string()),
            salvy_api_url: self.url(),
        }
    }

    fn app_state(&self) -> AppState {
        AppState::new(&self.config()).expect("Failed to build application state")
    }

    /// Server routes wrapped in the session layer and the route guard, as in `main`
    fn app(&self) -> Router {
        let state = self.app_state();

        router::routes()
            .with_state(state.clone())
            .layer(build_session_layer())
            .layer(middleware::from_fn_with_state(state, route_guard))
    }
}

/// Request to `uri` on the test host carrying `cookies`
pub fn request(method: Method, uri: &str, cookies: &[(&str, &str)], body: Body) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(HOST, TEST_HOST)
        .header("content-type", "application/json");

    if !cookies.is_empty() {
        let header = cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");
        builder = builder.header(COOKIE, header);
    }

    builder.body(body).expect("Failed to build request")
}

pub fn get(uri: &str, cookies: &[(&str, &str)]) -> Request<Body> {
    request(Method::GET, uri, cookies, Body::empty())
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Cookies the response sets, parsed
pub fn set_cookies(response: &Response) -> Vec<Cookie<'static>> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| Cookie::parse(value.to_string()).ok())
        .collect()
}

pub fn set_cookie(response: &Response, name: &str) -> Option<Cookie<'static>> {
    set_cookies(response)
        .into_iter()
        .find(|cookie| cookie.name() == name)
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8_lossy(&bytes).to_string()
}
