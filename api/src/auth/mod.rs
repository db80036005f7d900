pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use common::config::Config;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Map, Value, json};

/// Signs the given claims object and returns the token with its expiry
/// timestamp. A caller-supplied `exp` is overwritten; expiry is always
/// server-assigned.
pub fn generate_jwt(user: &Map<String, Value>) -> (String, String) {
    let config = Config::get();

    let expiry = Utc::now() + Duration::minutes(config.jwt_duration_minutes as i64);
    let exp_timestamp = expiry.timestamp() as usize;

    let mut claims = user.clone();
    claims.insert("exp".to_string(), json!(exp_timestamp));

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}
