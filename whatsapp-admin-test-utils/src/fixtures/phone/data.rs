use serde_json::{json, Value};

/// Virtual phone account as returned by the phone provider
pub fn virtual_phone_account_json() -> Value {
    json!({
        "id": "vpa_01JD8ZQ6Y3",
        "identifier": null,
        "phoneNumber": "+5511912345678",
        "status": "active",
        "createdAt": "2025-01-01T00:00:00.000Z",
        "canceledAt": null,
        "cancelReason": null,
        "redirectPhoneNumber": "+5511999999999",
        "redirectExpiresAt": "2025-01-04T00:00:00.000Z"
    })
}
