//! Shared test setup for the admin panel.
//!
//! Tests configure a [`TestBuilder`] with the provider endpoints they expect to be called and
//! receive a [`TestContext`] holding the mock server and a session to run against.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{
            auth::data::{session_json, user_json},
            phone::data::virtual_phone_account_json,
        },
        TestBuilder, TestContext, TestError,
    };
}
