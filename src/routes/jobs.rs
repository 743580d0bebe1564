use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{
        job_dto::{CreateJobPayload, JobListQuery, JobView, UpdateJobPayload},
        MessageResponse,
    },
    error::Result,
    middleware::{
        auth::{Caller, MaybeCaller},
        json::{ApiJson, ApiPath, ApiQuery},
    },
    AppState,
};

/// Open jobs by default; `?status=Closed` lists closed ones.
#[utoipa::path(
    get,
    path = "/jobs",
    params(("status" = Option<String>, Query, description = "Open or Closed")),
    responses(
        (status = 200, description = "Jobs with the requested status", body = Vec<JobView>),
        (status = 401, description = "Authorization header present but invalid")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    caller: MaybeCaller,
    ApiQuery(query): ApiQuery<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs = state
        .job_service
        .list_by_status(query.status.unwrap_or_default())
        .await?;
    Ok(Json(JobView::project_all(jobs, caller.role())))
}

#[utoipa::path(
    get,
    path = "/jobs/all",
    responses(
        (status = 200, description = "Every job, shaped for the caller", body = Vec<JobView>)
    )
)]
#[axum::debug_handler]
pub async fn list_all_jobs(
    State(state): State<AppState>,
    caller: MaybeCaller,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list_all().await?;
    Ok(Json(JobView::project_all(jobs, caller.role())))
}

#[utoipa::path(
    get,
    path = "/jobs/{id}",
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job, shaped for the caller", body = JobView),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    caller: MaybeCaller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get(id).await?;
    Ok(Json(JobView::project(job, caller.role())))
}

#[utoipa::path(
    get,
    path = "/jobs/{id}/applications",
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Applications for the job", body = Vec<ApplicationView>),
        (status = 403, description = "Caller is not staff"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn list_job_applications(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let applications = state.application_service.for_job(&caller.role, id).await?;
    Ok(Json(applications))
}

#[utoipa::path(
    post,
    path = "/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created", body = JobView),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Caller is not staff"),
        (status = 404, description = "Unknown hiring_manager_id")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(payload): ApiJson<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(&caller.role, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(JobView::project(job, Some(&caller.role))),
    ))
}

#[utoipa::path(
    patch,
    path = "/jobs/{id}",
    params(("id" = i32, Path, description = "Job ID")),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job updated", body = JobView),
        (status = 403, description = "Caller is not staff"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.update(&caller.role, id, payload).await?;
    Ok(Json(JobView::project(job, Some(&caller.role))))
}

#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job and its applications deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(&caller.role, id).await?;
    Ok(Json(MessageResponse::new(format!("Job {} deleted", id))))
}
