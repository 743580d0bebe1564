use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{
        application_dto::{CreateApplicationPayload, UpdateApplicationPayload},
        Listing, MessageResponse,
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
    path = "/applications",
    responses(
        (status = 200, description = "All applications", body = Vec<ApplicationView>),
        (status = 403, description = "Caller is not an admin")
    )
)]
#[axum::debug_handler]
pub async fn list_applications(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse> {
    let applications = state.application_service.list(&caller.role).await?;
    Ok(Json(applications))
}

#[utoipa::path(
    get,
    path = "/applications/mine",
    responses(
        (status = 200, description = "Caller's applications, or a message when there are none")
    )
)]
#[axum::debug_handler]
pub async fn my_applications(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse> {
    let applications = state.application_service.mine(&caller.role).await?;
    Ok(Json(Listing::or_message(
        applications,
        "You have no applications.",
    )))
}

#[utoipa::path(
    get,
    path = "/applications/{id}",
    params(("id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application, shaped for the caller", body = ApplicationView),
        (status = 403, description = "Neither staff nor the applicant"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn get_application(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let application = state.application_service.get(&caller.role, id).await?;
    Ok(Json(application))
}

#[utoipa::path(
    post,
    path = "/applications",
    request_body = CreateApplicationPayload,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationView),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Caller has no candidate profile"),
        (status = 404, description = "Unknown job_id")
    )
)]
#[axum::debug_handler]
pub async fn create_application(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(payload): ApiJson<CreateApplicationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let application = state
        .application_service
        .create(caller.user_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(application)))
}

#[utoipa::path(
    patch,
    path = "/applications/{id}",
    params(("id" = i32, Path, description = "Application ID")),
    request_body = UpdateApplicationPayload,
    responses(
        (status = 200, description = "Status changed", body = ApplicationView),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn update_application(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateApplicationPayload>,
) -> Result<impl IntoResponse> {
    let application = state
        .application_service
        .update_status(&caller.role, id, payload)
        .await?;
    Ok(Json(application))
}

#[utoipa::path(
    delete,
    path = "/applications/{id}",
    params(("id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application and its interviews deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_application(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.application_service.delete(&caller.role, id).await?;
    Ok(Json(MessageResponse::new(format!("Application {} deleted", id))))
}
