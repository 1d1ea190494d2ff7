use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::user::UserState;

#[component]
pub fn CallToAction(large: bool) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let size = if large { "btn-lg" } else { "" };

    rsx!(
        if user_state.read().user.is_some() {
            Link { to: Route::Dashboard {}, class: "btn btn-primary {size}",
                "Go to Dashboard"
            }
        } else {
            a { href: "/login", class: "btn btn-primary {size}",
                "Get Started"
            }
        }
    )
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> Element {
    rsx!(
        div { class: "card bg-base-100 shadow-xl",
            div { class: "card-body",
                h3 { class: "card-title", "{title}" }
                p { "{description}" }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "WhatsApp Bot Admin" }
        Meta {
            name: "description",
            content: "Manage your WhatsApp bots with ease"
        }
        Page {
            section { class: "py-12 md:py-24",
                div { class: "container mx-auto px-4 text-center",
                    h1 { class: "text-4xl md:text-6xl font-bold mb-6",
                        "Manage Your WhatsApp Bots"
                    }
                    p { class: "text-xl md:text-2xl max-w-3xl mx-auto mb-8",
                        "A powerful admin panel to create, configure, and monitor your WhatsApp bots"
                    }
                    CallToAction { large: true }
                }
            }
            section { class: "py-12 bg-base-200",
                div { class: "container mx-auto px-4",
                    h2 { class: "text-3xl font-bold text-center mb-12", "Key Features" }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                        FeatureCard {
                            title: "Easy Setup",
                            description: "Connect your WhatsApp account in seconds with a simple QR code scan"
                        }
                        FeatureCard {
                            title: "Automated Responses",
                            description: "Create custom automated responses for your customers"
                        }
                        FeatureCard {
                            title: "Real-time Monitoring",
                            description: "Track your bot's performance and message history in real-time"
                        }
                    }
                }
            }
            footer { class: "footer footer-center p-10 bg-base-300 text-base-content",
                div {
                    p { class: "font-bold", "WhatsApp Bot Admin" }
                    p { "All rights reserved" }
                }
            }
        }
    )
}
