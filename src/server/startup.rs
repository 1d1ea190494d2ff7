use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

/// Minutes a pending login may take before its PKCE verifier is dropped
pub const LOGIN_SESSION_INACTIVITY_MINUTES: i64 = 10;

/// Configure the session layer holding the PKCE verifier between login and callback
pub fn build_session_layer() -> SessionManagerLayer<MemoryStore> {
    let session_store = MemoryStore::default();

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            LOGIN_SESSION_INACTIVITY_MINUTES,
        )))
}
