use axum::{
    extract::State,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{
        auth_dto::{UpdateUserPayload, UserView},
        MessageResponse,
    },
    error::Result,
    middleware::{
        auth::Caller,
        json::{ApiJson, ApiPath},
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Vec<UserView>),
        (status = 403, description = "Caller is not staff")
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>, caller: Caller) -> Result<impl IntoResponse> {
    let users = state.identity_service.list(&caller.role).await?;
    let views: Vec<UserView> = users.into_iter().map(UserView::from).collect();
    Ok(Json(views))
}

#[utoipa::path(
    put,
    path = "/users",
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "Own account updated", body = UserView),
        (status = 409, description = "Email already in use")
    )
)]
#[axum::debug_handler]
pub async fn update_self(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(payload): ApiJson<UpdateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .identity_service
        .update_self(caller.user_id, payload)
        .await?;
    Ok(Json(UserView::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.identity_service.delete(&caller.role, id).await?;
    Ok(Json(MessageResponse::new(format!("User {} deleted", id))))
}
