use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "opacity-70", "/{segments.join(\"/\")}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to home" }
        }
    )
}
