//! HTTP routing and OpenAPI documentation configuration.
//!
//! API endpoints are registered with their OpenAPI specifications and collected into one
//! document served through Swagger UI at `/api/docs`. The login pages are plain routes since
//! they render HTML and redirect rather than exchange JSON.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the server routes.
///
/// # Registered Endpoints
/// - `GET|POST /login` - Login page with the provider sign-in link
/// - `GET /login/success` - Provider callback, also under `/login/success/{*redirect}`
/// - `POST /api/auth/signout` - Sign out the current user
/// - `GET /api/auth/user` - Get the signed in user
/// - `POST /api/phone/virtual-accounts` - Buy a virtual phone number
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "WhatsApp Admin", description = "WhatsApp bot admin panel API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::phone::PHONE_TAG, description = "Virtual phone number API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::signout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::phone::buy_phone_number))
        .split_for_parts();

    routes
        .route(
            "/login",
            get(controller::auth::login).post(controller::auth::login),
        )
        .route("/login/success", get(controller::auth::login_success))
        .route(
            "/login/success/{*redirect}",
            get(controller::auth::login_success),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
