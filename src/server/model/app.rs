use std::sync::Arc;

use crate::server::{
    config::Config, error::Error, provider::accessor::AuthClientAccessor,
    service::phone::PhoneService,
};

/// State shared by every handler and the route guard.
#[derive(Clone)]
pub struct AppState {
    /// Builds provider clients; holds the memoized browser-context client
    pub auth: Arc<AuthClientAccessor>,
    /// Virtual phone number provider
    pub phone: PhoneService,
}

impl AppState {
    /// Builds the application state from validated configuration.
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            auth: Arc::new(AuthClientAccessor::new(config)),
            phone: PhoneService::new(config)?,
        })
    }
}
