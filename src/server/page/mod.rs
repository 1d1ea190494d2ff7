//! Server rendered pages.
//!
//! Pages that depend on per-request server state, such as the PKCE challenge embedded in the
//! provider sign-in link, are rendered to HTML on the server instead of by the client app.

pub mod login;
