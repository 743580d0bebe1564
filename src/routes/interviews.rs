use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{
        interview_dto::{CreateInterviewPayload, UpdateInterviewPayload},
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
    path = "/interviews/all",
    responses(
        (status = 200, description = "Every interview", body = Vec<InterviewView>),
        (status = 403, description = "Caller is not an admin")
    )
)]
#[axum::debug_handler]
pub async fn list_all_interviews(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse> {
    let interviews = state.interview_service.list_all(&caller.role).await?;
    Ok(Json(interviews))
}

#[utoipa::path(
    get,
    path = "/interviews",
    responses(
        (status = 200, description = "Interviews the caller conducts or attends, or a message when there are none")
    )
)]
#[axum::debug_handler]
pub async fn my_interviews(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse> {
    let interviews = state.interview_service.mine(&caller.role).await?;
    Ok(Json(Listing::or_message(
        interviews,
        "You have no scheduled interviews.",
    )))
}

#[utoipa::path(
    get,
    path = "/interviews/{id}",
    params(("id" = i32, Path, description = "Interview ID")),
    responses(
        (status = 200, description = "Interview, shaped for the caller", body = InterviewView),
        (status = 403, description = "Not an admin, the interviewer or the candidate"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn get_interview(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.get(&caller.role, id).await?;
    Ok(Json(interview))
}

#[utoipa::path(
    post,
    path = "/interviews",
    request_body = CreateInterviewPayload,
    responses(
        (status = 201, description = "Interview scheduled", body = InterviewView),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Caller is not staff"),
        (status = 404, description = "Unknown application_id or interviewer_id")
    )
)]
#[axum::debug_handler]
pub async fn create_interview(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(payload): ApiJson<CreateInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state
        .interview_service
        .create(&caller.role, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(interview)))
}

#[utoipa::path(
    patch,
    path = "/interviews/{id}",
    params(("id" = i32, Path, description = "Interview ID")),
    request_body = UpdateInterviewPayload,
    responses(
        (status = 200, description = "Interview updated", body = InterviewView),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn update_interview(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state
        .interview_service
        .update(&caller.role, id, payload)
        .await?;
    Ok(Json(interview))
}

#[utoipa::path(
    delete,
    path = "/interviews/{id}",
    params(("id" = i32, Path, description = "Interview ID")),
    responses(
        (status = 200, description = "Interview and its scorecard deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_interview(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.interview_service.delete(&caller.role, id).await?;
    Ok(Json(MessageResponse::new(format!("Interview {} deleted", id))))
}
