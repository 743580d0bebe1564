use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    dto::auth_dto::{LoginPayload, LoginResponse, RegisterPayload, UserView},
    error::Result,
    middleware::json::ApiJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "User registered", body = UserView),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Email already in use")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.identity_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(UserView::from(user))))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Incorrect email or password")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginPayload>,
) -> Result<impl IntoResponse> {
    let user = state.identity_service.login(payload).await?;
    let token = state.tokens.issue(user.id)?;
    Ok(Json(LoginResponse {
        email: user.email,
        token,
    }))
}
