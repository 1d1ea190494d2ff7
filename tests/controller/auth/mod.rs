//! Tests for authentication controller endpoints.
//!
//! Covers the login page, the provider callback, sign out and retrieval of the signed in user.

mod login;
mod login_success;
mod signout;
mod user;

use super::*;
