//! Fixture modules for provider responses and mock HTTP endpoints.
//!
//! - `auth` - Auth provider users, sessions and the GoTrue endpoints
//! - `phone` - Virtual phone accounts and the purchase endpoint

pub mod auth;
pub mod phone;
