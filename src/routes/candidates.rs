use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::{
        candidate_dto::{CandidateView, CreateCandidatePayload, UpdateCandidatePayload},
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
    path = "/candidates",
    responses(
        (status = 200, description = "All candidates", body = Vec<CandidateView>),
        (status = 403, description = "Caller is not an admin")
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.list(&caller.role).await?;
    let views: Vec<CandidateView> = candidates.into_iter().map(CandidateView::from).collect();
    Ok(Json(views))
}

#[utoipa::path(
    get,
    path = "/candidates/me",
    responses(
        (status = 200, description = "Caller's candidate profile", body = CandidateView),
        (status = 404, description = "Caller has no candidate profile")
    )
)]
#[axum::debug_handler]
pub async fn my_profile(State(state): State<AppState>, caller: Caller) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.me(caller.user_id).await?;
    Ok(Json(CandidateView::from(candidate)))
}

#[utoipa::path(
    post,
    path = "/candidates",
    request_body = CreateCandidatePayload,
    responses(
        (status = 201, description = "Candidate profile created", body = CandidateView),
        (status = 409, description = "Caller already has a candidate profile")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(payload): ApiJson<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state
        .candidate_service
        .create(caller.user_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(CandidateView::from(candidate))))
}

#[utoipa::path(
    patch,
    path = "/candidates",
    request_body = UpdateCandidatePayload,
    responses(
        (status = 200, description = "Candidate profile updated", body = CandidateView),
        (status = 404, description = "Caller has no candidate profile")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(payload): ApiJson<UpdateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state
        .candidate_service
        .update_self(caller.user_id, payload)
        .await?;
    Ok(Json(CandidateView::from(candidate)))
}

#[utoipa::path(
    delete,
    path = "/candidates/{id}",
    params(("id" = i32, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Candidate deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.candidate_service.delete(&caller.role, id).await?;
    Ok(Json(MessageResponse::new(format!("Candidate {} deleted", id))))
}
