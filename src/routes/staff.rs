use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{
        staff_dto::{CreateStaffPayload, StaffView, UpdateStaffPayload},
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
    path = "/staff",
    responses(
        (status = 200, description = "All staff members", body = Vec<StaffView>),
        (status = 403, description = "Caller is not an admin")
    )
)]
#[axum::debug_handler]
pub async fn list_staff(State(state): State<AppState>, caller: Caller) -> Result<impl IntoResponse> {
    let staff = state.staff_service.list(&caller.role).await?;
    let views: Vec<StaffView> = staff.into_iter().map(StaffView::from).collect();
    Ok(Json(views))
}

#[utoipa::path(
    get,
    path = "/staff/{id}",
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff member", body = StaffView),
        (status = 403, description = "Neither an admin nor this staff member"),
        (status = 404, description = "Staff member not found")
    )
)]
#[axum::debug_handler]
pub async fn get_staff(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let staff = state.staff_service.get(&caller.role, id).await?;
    Ok(Json(StaffView::from(staff)))
}

#[utoipa::path(
    post,
    path = "/staff",
    request_body = CreateStaffPayload,
    responses(
        (status = 201, description = "Staff member created", body = StaffView),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Unknown user_id"),
        (status = 409, description = "User already has a staff profile")
    )
)]
#[axum::debug_handler]
pub async fn create_staff(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(payload): ApiJson<CreateStaffPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let staff = state.staff_service.create(&caller.role, payload).await?;
    Ok((StatusCode::CREATED, Json(StaffView::from(staff))))
}

#[utoipa::path(
    patch,
    path = "/staff/{id}",
    params(("id" = i32, Path, description = "Staff ID")),
    request_body = UpdateStaffPayload,
    responses(
        (status = 200, description = "Staff member updated", body = StaffView),
        (status = 403, description = "Not allowed to change this profile or the admin flag"),
        (status = 404, description = "Staff member not found")
    )
)]
#[axum::debug_handler]
pub async fn update_staff(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateStaffPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let staff = state.staff_service.update(&caller.role, id, payload).await?;
    Ok(Json(StaffView::from(staff)))
}

#[utoipa::path(
    delete,
    path = "/staff/{id}",
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff member deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 409, description = "Staff member still manages jobs or interviews")
    )
)]
#[axum::debug_handler]
pub async fn delete_staff(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.staff_service.delete(&caller.role, id).await?;
    Ok(Json(MessageResponse::new(format!("Staff member {} deleted", id))))
}
