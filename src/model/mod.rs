//! Data transfer types shared between the server and the web client.

pub mod api;
pub mod asset;
pub mod user;
