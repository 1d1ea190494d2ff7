//! Utility functions and helpers for server operations.
//!
//! Currently only holds helpers shared by the server unit tests.
