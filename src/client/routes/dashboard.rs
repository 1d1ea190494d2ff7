use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleInfo, FaEnvelope, FaPlus, FaRobot};
use dioxus_free_icons::Icon;

use crate::{
    client::{components::Page, store::user::UserState},
    model::user::DEFAULT_DISPLAY_NAME,
};

#[component]
fn Stat(title: &'static str, description: &'static str, children: Element) -> Element {
    rsx!(
        div { class: "stat",
            div { class: "stat-figure text-primary", {children} }
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "0" }
            div { class: "stat-desc", "{description}" }
        }
    )
}

#[component]
pub fn Dashboard() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    let user_name = user_state
        .read()
        .user
        .as_ref()
        .map(|user| user.display_name())
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

    rsx!(
        Title { "Dashboard - WhatsApp Bot Admin" }
        Page {
            main { class: "container mx-auto p-4 md:p-8",
                div { class: "flex flex-col md:flex-row items-center justify-between mb-8",
                    div {
                        h1 { class: "text-3xl font-bold", "Welcome, {user_name}!" }
                        p { class: "text-base-content/70",
                            "Manage your WhatsApp bots and configurations"
                        }
                    }
                    a { href: "/clients/new", class: "btn btn-primary mt-4 md:mt-0 flex gap-2",
                        Icon { width: 16, height: 16, icon: FaPlus }
                        "Create New Bot"
                    }
                }
                div { class: "stats shadow w-full mb-8",
                    Stat { title: "Total Bots", description: "Your WhatsApp Bots",
                        Icon { width: 32, height: 32, icon: FaRobot }
                    }
                    Stat { title: "Active Bots", description: "Currently running",
                        Icon { width: 32, height: 32, icon: FaCircleInfo }
                    }
                    Stat { title: "Messages", description: "Total processed",
                        Icon { width: 32, height: 32, icon: FaEnvelope }
                    }
                }
                div { class: "card bg-base-200 shadow-xl mb-8",
                    div { class: "card-body",
                        h2 { class: "card-title", "Quick Actions" }
                        div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 mt-4",
                            a { href: "/clients/new", class: "btn btn-outline", "New Bot" }
                            a { href: "/templates", class: "btn btn-outline", "Message Templates" }
                            a { href: "/reports", class: "btn btn-outline", "Analytics" }
                            a { href: "/settings", class: "btn btn-outline", "Settings" }
                        }
                    }
                }
                div { class: "mt-8",
                    h2 { class: "text-2xl font-bold mb-4", "Recent Activity" }
                    div { class: "overflow-x-auto",
                        table { class: "table w-full",
                            thead {
                                tr {
                                    th { "Bot Name" }
                                    th { "Status" }
                                    th { "Last Active" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                tr {
                                    td { colspan: 4, class: "text-center py-8",
                                        div { class: "flex flex-col items-center justify-center",
                                            p { class: "mt-4 text-base-content/70", "No activity yet" }
                                            a { href: "/clients/new", class: "btn btn-sm btn-primary mt-4",
                                                "Create Your First Bot"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
