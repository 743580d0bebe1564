use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::error::{Error, Result};
use crate::models::role::Role;
use crate::AppState;

/// An authenticated user together with their resolved role.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: i32,
    pub role: Role,
}

/// Like [`Caller`], but anonymous requests (no `Authorization` header) are
/// let through as `None`. A header that is present must still be valid.
#[derive(Debug, Clone)]
pub struct MaybeCaller(pub Option<Caller>);

impl MaybeCaller {
    pub fn role(&self) -> Option<&Role> {
        self.0.as_ref().map(|caller| &caller.role)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let token = bearer_token(&parts.headers)?;
        let user_id = state.tokens.verify(token)?;

        if state.identity_service.find_user(user_id).await?.is_none() {
            tracing::warn!(user_id, "Token presented for a deleted user");
            return Err(Error::Unauthenticated("invalid_token".to_string()));
        }

        let role = state.role_service.resolve(user_id).await?;
        Ok(Caller { user_id, role })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeCaller {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(MaybeCaller(None));
        }
        Caller::from_request_parts(parts, state)
            .await
            .map(|caller| MaybeCaller(Some(caller)))
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::Unauthenticated("missing_authorization".to_string()))?;
    let value = header
        .to_str()
        .map_err(|_| Error::Unauthenticated("bad_authorization".to_string()))?;
    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::Unauthenticated("unsupported_scheme".to_string()))
}
