//! Server application models and type definitions.
//!
//! This module contains data models for the server application: application state, the
//! provider's session and user shapes, auth state change events, server-side session data
//! used during the OAuth flow, and the virtual phone number purchase payloads.

pub mod app;
pub mod auth;
pub mod phone;
pub mod session;
