use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use common::config::Config;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::auth::claims::{AuthUser, Claims};

/// Implements extraction of `AuthUser` from the request's cookies.
///
/// Looks for the `token` cookie, verifies the JWT against the configured
/// secret, and extracts the claims into an `AuthUser` instance.
///
/// # Errors
/// Returns `401 Unauthorized` when the cookie is missing or the token is
/// invalid or expired. The message is the same in every case so callers
/// cannot probe which check failed.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| (StatusCode::UNAUTHORIZED, "unauthorized access"))?;

        let token = jar
            .get("token")
            .ok_or((StatusCode::UNAUTHORIZED, "unauthorized access"))?;

        let token_data = decode::<Claims>(
            token.value(),
            &DecodingKey::from_secret(Config::get().jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| (StatusCode::UNAUTHORIZED, "unauthorized access"))?;

        Ok(AuthUser(token_data.claims))
    }
}
