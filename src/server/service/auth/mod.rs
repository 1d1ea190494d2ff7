//! Authentication service layer.
//!
//! Session cookies, the login redirect chain and the reactions to session changes reported
//! by the auth provider client.

pub mod cookie;
pub mod listener;
pub mod redirect;
