//! Request middleware applied in front of every route.

pub mod route_guard;
