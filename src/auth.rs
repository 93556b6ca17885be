//! Demo user extraction. No verification happens here: a Bearer token of any
//! shape maps to the fixed authenticated demo user, anything else to the
//! anonymous demo user.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

pub const AUTH_USER_ID: &str = "auth_user_123";
pub const DEMO_USER_ID: &str = "demo_user_123";

pub struct CurrentUser(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        let user_id = match bearer {
            Some(_) => AUTH_USER_ID,
            None => DEMO_USER_ID,
        };
        Ok(CurrentUser(user_id.to_string()))
    }
}
