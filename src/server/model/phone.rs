//! Virtual phone number purchase payloads.
//!
//! Field names follow the phone provider's camelCase JSON. Timestamps stay as strings so the
//! provider response is returned to callers exactly as received.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::error::phone::PhoneError;

/// Lowest area code accepted by the phone provider
pub const MIN_AREA_CODE: i64 = 11;
/// Highest area code accepted by the phone provider
pub const MAX_AREA_CODE: i64 = 99;

/// Request to buy a virtual phone number that forwards calls to `redirect_phone_number`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuyPhoneNumberRequest {
    /// Optional caller-chosen identifier for the number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Area code for the desired number (11 to 99)
    #[serde(default)]
    pub area_code: i64,
    /// Phone number (including area code) calls are forwarded to
    #[serde(default)]
    pub redirect_phone_number: String,
    /// ISO-8601 expiration of the call forwarding, provider default is 72 hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_expires_at: Option<String>,
}

impl BuyPhoneNumberRequest {
    /// Checks the request before anything is sent to the provider.
    pub fn validate(&self) -> Result<(), PhoneError> {
        if self.area_code == 0 || self.redirect_phone_number.trim().is_empty() {
            return Err(PhoneError::MissingRequiredFields);
        }

        if !(MIN_AREA_CODE..=MAX_AREA_CODE).contains(&self.area_code) {
            return Err(PhoneError::InvalidAreaCode(self.area_code));
        }

        if let Some(expires_at) = &self.redirect_expires_at {
            DateTime::parse_from_rfc3339(expires_at)
                .map_err(|_| PhoneError::InvalidRedirectExpiration(expires_at.clone()))?;
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PhoneStatus {
    Active,
    Canceled,
}

/// A virtual phone number as returned by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VirtualPhoneAccount {
    /// Unique ID assigned by the provider
    pub id: String,
    pub identifier: Option<String>,
    /// Assigned number in E.164 format
    pub phone_number: String,
    pub status: PhoneStatus,
    pub created_at: String,
    pub canceled_at: Option<String>,
    pub cancel_reason: Option<String>,
    /// Forwarding number in E.164 format
    pub redirect_phone_number: String,
    pub redirect_expires_at: Option<String>,
}
