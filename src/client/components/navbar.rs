use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleUser, FaGear, FaRightFromBracket};
use dioxus_free_icons::Icon;

use crate::client::router::Route;
use crate::client::store::user::UserState;

#[component]
pub fn Navbar() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx! {
        div {
            class: "navbar bg-base-200 shadow-md",
            div {
                class: "flex-1",
                Link { to: Route::Home {}, class: "text-xl font-bold px-4",
                    "WhatsApp Bot Admin"
                }
            }
            div {
                class: "flex-none gap-2",
                if let Some(user) = state.user.as_ref() {
                    div { class: "dropdown dropdown-end",
                        label { tabindex: 0, class: "btn btn-ghost btn-circle avatar",
                            div { class: "w-10 rounded-full ring ring-primary ring-offset-base-100 ring-offset-2",
                                img { src: user.avatar(), alt: "User avatar" }
                            }
                        }
                        ul { class: "mt-3 z-[1] p-2 shadow menu menu-sm dropdown-content bg-base-200 rounded-box w-52",
                            li { class: "mb-2 p-2 text-center",
                                div { class: "font-bold", "{user.display_name()}" }
                                if let Some(email) = user.email.as_ref() {
                                    div { class: "text-sm opacity-70", "{email}" }
                                }
                            }
                            li {
                                a { href: "/profile",
                                    Icon { width: 16, height: 16, icon: FaCircleUser }
                                    "Profile"
                                }
                            }
                            li {
                                a { href: "/settings",
                                    Icon { width: 16, height: 16, icon: FaGear }
                                    "Settings"
                                }
                            }
                            li {
                                form { method: "POST", action: "/api/auth/signout",
                                    button { r#type: "submit", class: "w-full text-left text-error flex gap-2",
                                        Icon { width: 16, height: 16, icon: FaRightFromBracket }
                                        "Sign out"
                                    }
                                }
                            }
                        }
                    }
                } else if state.fetched {
                    a { href: "/login", class: "btn btn-primary", "Login" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
