use dioxus::prelude::*;

use crate::{
    client::{router::Route, store::user::UserState},
    model::asset::{DAISYUI_CDN, TAILWIND_BROWSER_CDN},
};

#[component]
pub fn App() -> Element {
    let user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Retrieve the signed in user once on load
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::store::user::get_user;

        let mut user_state = user_state;
        let future = use_resource(|| async move { get_user().await });

        use_effect(move || match &*future.read() {
            Some(Ok(user)) => user_state.set(UserState {
                user: user.clone(),
                fetched: true,
            }),
            Some(Err(err)) => {
                tracing::error!(err);
                user_state.write().fetched = true;
            }
            None => (),
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = user_state;

    rsx! {
        document::Title { "WhatsApp Bot Admin" }
        document::Stylesheet { href: DAISYUI_CDN }
        document::Script { src: TAILWIND_BROWSER_CDN }
        Router::<Route> {}
    }
}
