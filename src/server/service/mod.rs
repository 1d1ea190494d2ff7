//! Service layer for business logic.
//!
//! Services implement the session cookie handling and login redirect chain used by the
//! controllers and route guard, and the virtual phone number purchase.

pub mod auth;
pub mod phone;
