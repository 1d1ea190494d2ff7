//! Server-side session data.
//!
//! Token state lives in cookies; the server session only carries short-lived OAuth flow
//! state between rendering the login page and handling the provider callback.

pub mod auth;
