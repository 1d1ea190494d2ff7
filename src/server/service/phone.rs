use dioxus_logger::tracing;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::server::{
    config::Config,
    error::{phone::PhoneError, Error},
    model::phone::BuyPhoneNumberRequest,
    provider::transport::APP_USER_AGENT,
};

/// Path of the virtual phone account endpoint
pub const VIRTUAL_PHONE_ACCOUNTS_PATH: &str = "/api/virtual-phone-accounts";

/// Client for the virtual phone number provider.
#[derive(Clone)]
pub struct PhoneService {
    http: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl PhoneService {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_url: config.salvy_api_url.trim_end_matches('/').to_string(),
            token: config.salvy_token.clone(),
        })
    }

    /// Buys a virtual phone number.
    ///
    /// The request is validated before the provider token is checked or any request is made.
    ///
    /// # Returns
    /// - `Ok(Value)`: The provider's JSON response, unchanged
    /// - `Err(Error::PhoneError)`: Validation failed, `SALVY_TOKEN` is not configured or the
    ///   provider answered with a non-success status
    /// - `Err(Error::HttpError)`: Request failed or the response was not JSON
    pub async fn buy_phone_number(&self, request: &BuyPhoneNumberRequest) -> Result<Value, Error> {
        request.validate()?;

        let token = self.token.as_deref().ok_or(PhoneError::MissingToken)?;

        let response = self
            .http
            .post(format!("{}{}", self.api_url, VIRTUAL_PHONE_ACCOUNTS_PATH))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(PhoneError::PurchaseFailed {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let account: Value = response.json().await?;

        tracing::info!(
            area_code = request.area_code,
            phone_number = account.get("phoneNumber").and_then(serde_json::Value::as_str),
            "Purchased virtual phone number"
        );

        Ok(account)
    }
}
