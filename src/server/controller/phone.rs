use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::util::session::require_session,
        error::Error,
        model::{
            app::AppState,
            phone::{BuyPhoneNumberRequest, VirtualPhoneAccount},
        },
    },
};

pub static PHONE_TAG: &str = "phone";

/// Buys a virtual phone number that forwards calls to the given number
///
/// Requires a signed in user. The request is validated before the phone provider is called
/// and the provider's response is returned unchanged.
#[utoipa::path(
    post,
    path = "/api/phone/virtual-accounts",
    tag = PHONE_TAG,
    request_body = BuyPhoneNumberRequest,
    responses(
        (status = 200, description = "Purchased virtual phone number", body = VirtualPhoneAccount),
        (status = 400, description = "Invalid purchase request", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "Phone provider rejected the purchase", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn buy_phone_number(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<BuyPhoneNumberRequest>,
) -> Result<impl IntoResponse, Error> {
    require_session(&state, &jar).await?;

    let account = state.phone.buy_phone_number(&request).await?;

    Ok(Json(account))
}
