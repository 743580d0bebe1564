use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{
        scorecard_dto::{CreateScorecardPayload, UpdateScorecardPayload},
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
    path = "/interviews/{id}/scorecards",
    params(("id" = i32, Path, description = "Interview ID")),
    responses(
        (status = 200, description = "The interview's scorecard", body = ScorecardView),
        (status = 403, description = "Neither an admin nor the interviewer"),
        (status = 404, description = "No scorecard yet")
    )
)]
#[axum::debug_handler]
pub async fn get_scorecard(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(interview_id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let scorecard = state
        .scorecard_service
        .get(&caller.role, interview_id)
        .await?;
    Ok(Json(scorecard))
}

#[utoipa::path(
    post,
    path = "/interviews/{id}/scorecards",
    params(("id" = i32, Path, description = "Interview ID")),
    request_body = CreateScorecardPayload,
    responses(
        (status = 201, description = "Scorecard written", body = ScorecardView),
        (status = 403, description = "Caller is not the interviewer"),
        (status = 409, description = "The interview already has a scorecard")
    )
)]
#[axum::debug_handler]
pub async fn create_scorecard(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(interview_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<CreateScorecardPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let scorecard = state
        .scorecard_service
        .create(&caller.role, interview_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(scorecard)))
}

#[utoipa::path(
    patch,
    path = "/interviews/{id}/scorecards",
    params(("id" = i32, Path, description = "Interview ID")),
    request_body = UpdateScorecardPayload,
    responses(
        (status = 200, description = "Scorecard updated", body = ScorecardView),
        (status = 403, description = "Caller is not the interviewer"),
        (status = 404, description = "No scorecard yet")
    )
)]
#[axum::debug_handler]
pub async fn update_scorecard(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(interview_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateScorecardPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let scorecard = state
        .scorecard_service
        .update(&caller.role, interview_id, payload)
        .await?;
    Ok(Json(scorecard))
}

#[utoipa::path(
    delete,
    path = "/interviews/{id}/scorecards",
    params(("id" = i32, Path, description = "Interview ID")),
    responses(
        (status = 200, description = "Scorecard deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "No scorecard for this interview")
    )
)]
#[axum::debug_handler]
pub async fn delete_scorecard(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(interview_id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state
        .scorecard_service
        .delete(&caller.role, interview_id)
        .await?;
    Ok(Json(MessageResponse::new(format!(
        "Scorecard for interview {} deleted",
        interview_id
    ))))
}
