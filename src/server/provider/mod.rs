//! Auth provider integration.
//!
//! Contains the typed client for the provider's auth API, the network transport it sends
//! requests through, the accessor that constructs browser- and server-context clients, and
//! the impersonation JWT signer used for service-role access on behalf of a user.

pub mod accessor;
pub mod client;
pub mod jwt;
pub mod transport;
