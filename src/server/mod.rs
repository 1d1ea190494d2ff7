//! Server application core modules.
//!
//! This module contains all server-side functionality for the admin panel: HTTP routing,
//! the provider auth client, cookie-backed sessions, the route guard middleware, the login
//! redirect flow, and the virtual phone number purchase action.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod page;
pub mod provider;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
