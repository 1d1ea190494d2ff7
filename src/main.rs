#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use whatsapp_admin::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::middleware;
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, middleware::route_guard::route_guard, model::app::AppState, startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let state = match AppState::new(&config) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Failed to build application state: {}", e);
                std::process::exit(1);
            }
        };
        let session = startup::build_session_layer();

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(state.clone())
            .layer(session);
        router = router
            .merge(server_routes)
            .layer(middleware::from_fn_with_state(state, route_guard));

        Ok(router)
    })
}
