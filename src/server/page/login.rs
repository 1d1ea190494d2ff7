use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
use dioxus_free_icons::Icon;

use crate::model::asset::{DAISYUI_CDN, TAILWIND_BROWSER_CDN};

#[component]
pub fn LoginPage(google_url: String) -> Element {
    rsx!(
        div { class: "min-h-screen bg-base-100 flex items-center justify-center px-4",
            div { class: "card w-full max-w-md bg-base-200 shadow-xl",
                div { class: "card-body",
                    div { class: "text-center mb-8",
                        h1 { class: "text-3xl font-bold",
                            "WhatsApp Bot Admin"
                        }
                        p { class: "text-sm opacity-70 mt-2",
                            "Sign in to manage your WhatsApp bots"
                        }
                    }
                    div { class: "flex flex-col items-center gap-6",
                        a {
                            href: "{google_url}",
                            class: "btn btn-outline w-full flex items-center justify-center gap-2",
                            Icon {
                                width: 20,
                                height: 20,
                                icon: FaGoogle
                            }
                            "Continue with Google"
                        }
                        p { class: "text-sm text-center opacity-70",
                            "By signing in, you agree to our Terms of Service and Privacy Policy."
                        }
                    }
                }
            }
        }
    )
}

/// Renders the complete login document linking to `google_url`.
pub fn render_login_page(google_url: &str) -> String {
    let body = dioxus::ssr::render_element(rsx! {
        LoginPage { google_url: google_url.to_string() }
    });

    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"en\" data-theme=\"light\">",
            "<head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>WhatsApp Bot Admin - Login</title>",
            "<meta name=\"description\" content=\"Login to your WhatsApp Bot Admin Panel\">",
            "<link href=\"{daisyui}\" rel=\"stylesheet\" type=\"text/css\">",
            "<script src=\"{tailwind}\"></script>",
            "</head>",
            "<body>{body}</body>",
            "</html>"
        ),
        daisyui = DAISYUI_CDN,
        tailwind = TAILWIND_BROWSER_CDN,
        body = body
    )
}
