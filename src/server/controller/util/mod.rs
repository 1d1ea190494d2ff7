//! Utility functions for controller request handling.
//!
//! Extraction of the full request URL, redirect responses and session lookup from the
//! token cookies for endpoints that require a signed-in user.

pub mod redirect;
pub mod request_url;
pub mod session;
