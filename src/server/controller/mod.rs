//! HTTP controller endpoints for the admin panel.
//!
//! Axum handlers for the login flow, sign-out, the current user and the phone purchase
//! action. Controllers extract cookies and the request URL, call into the services and
//! provider clients, and build redirects or JSON responses. API endpoints are documented
//! with utoipa.

pub mod auth;
pub mod phone;
pub mod util;
