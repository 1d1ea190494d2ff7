use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{Map, Value};

use crate::server::error::Error;

/// Lifetime of an impersonation token
pub const IMPERSONATION_TTL_SECONDS: i64 = 600;

/// Signs a short-lived HS256 token that lets a service client act as `user_id`.
///
/// Claims are `iat`, `exp` (`iat` + 10 minutes) and `sub`, followed by `extra_claims`. An extra
/// claim with the same name as a standard claim replaces it.
pub fn create_jwt(
    secret: &str,
    user_id: &str,
    extra_claims: Map<String, Value>,
) -> Result<String, Error> {
    let issued_at = Utc::now().timestamp();

    let mut claims = Map::new();
    claims.insert("iat".to_string(), Value::from(issued_at));
    claims.insert(
        "exp".to_string(),
        Value::from(issued_at + IMPERSONATION_TTL_SECONDS),
    );
    claims.insert("sub".to_string(), Value::from(user_id));
    claims.extend(extra_claims);

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}
