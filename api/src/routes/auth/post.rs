//! Credential issue and revoke handlers.
//!
//! The browser carries the credential in a `token` cookie rather than an
//! `Authorization` header, so both handlers answer with cookie mutations.

use axum::{Json, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::{Map, Value};
use tracing::info;

use crate::auth::generate_jwt;
use crate::response::AuthAck;

/// POST /jwt
///
/// Signs the request body as-is into a short-lived credential and sets it
/// as the `token` cookie. The cookie is `HttpOnly`, `Secure` and
/// `SameSite=None` so the cross-origin frontend can use it while scripts
/// cannot read it.
///
/// ### Request Body
/// Any JSON object, typically the logged-in user's identity:
/// ```json
/// { "email": "alice@example.com" }
/// ```
///
/// ### Response
/// - `200 OK`
/// ```json
/// { "success": true }
/// ```
pub async fn issue_token(jar: CookieJar, Json(user): Json<Map<String, Value>>) -> impl IntoResponse {
    let (token, _expires_at) = generate_jwt(&user);

    let cookie = Cookie::build(("token", token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .build();

    (StatusCode::OK, jar.add(cookie), Json(AuthAck::ok()))
}

/// POST /logout
///
/// Clears the `token` cookie. Always acknowledges, whether or not the
/// caller still held a credential.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    info!("Clearing credential cookie");

    let mut cookie = Cookie::from("token");
    cookie.set_path("/");

    (StatusCode::OK, jar.remove(cookie), Json(AuthAck::ok()))
}
