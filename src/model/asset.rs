//! Stylesheets and scripts loaded by both the client app and the server-rendered login page.

/// DaisyUI stylesheet
pub const DAISYUI_CDN: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
/// Tailwind browser build
pub const TAILWIND_BROWSER_CDN: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
