pub mod applications;
pub mod auth;
pub mod candidates;
pub mod health;
pub mod interviews;
pub mod jobs;
pub mod scorecards;
pub mod staff;
pub mod users;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{
    cors::api_cors,
    rate_limit::{new_rps_state, rps_middleware},
};
use crate::AppState;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The whole HTTP surface. `/auth/*` has its own, tighter rate limit.
pub fn router(state: AppState) -> Router {
    let auth_api = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .layer(from_fn_with_state(
            new_rps_state(state.config.auth_rps),
            rps_middleware,
        ));

    let api = Router::new()
        .route(
            "/users",
            get(users::list_users)
                .put(users::update_self)
                .patch(users::update_self),
        )
        .route("/users/:id", axum::routing::delete(users::delete_user))
        .route("/staff", get(staff::list_staff).post(staff::create_staff))
        .route(
            "/staff/:id",
            get(staff::get_staff)
                .put(staff::update_staff)
                .patch(staff::update_staff)
                .delete(staff::delete_staff),
        )
        .route(
            "/candidates",
            get(candidates::list_candidates)
                .post(candidates::create_candidate)
                .put(candidates::update_candidate)
                .patch(candidates::update_candidate),
        )
        .route("/candidates/me", get(candidates::my_profile))
        .route(
            "/candidates/:id",
            axum::routing::delete(candidates::delete_candidate),
        )
        .route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/jobs/all", get(jobs::list_all_jobs))
        .route(
            "/jobs/:id",
            get(jobs::get_job)
                .put(jobs::update_job)
                .patch(jobs::update_job)
                .delete(jobs::delete_job),
        )
        .route("/jobs/:id/applications", get(jobs::list_job_applications))
        .route(
            "/applications",
            get(applications::list_applications).post(applications::create_application),
        )
        .route("/applications/mine", get(applications::my_applications))
        .route(
            "/applications/:id",
            get(applications::get_application)
                .put(applications::update_application)
                .patch(applications::update_application)
                .delete(applications::delete_application),
        )
        .route(
            "/interviews",
            get(interviews::my_interviews).post(interviews::create_interview),
        )
        .route("/interviews/all", get(interviews::list_all_interviews))
        .route(
            "/interviews/:id",
            get(interviews::get_interview)
                .put(interviews::update_interview)
                .patch(interviews::update_interview)
                .delete(interviews::delete_interview),
        )
        .route(
            "/interviews/:id/scorecards",
            get(scorecards::get_scorecard)
                .post(scorecards::create_scorecard)
                .put(scorecards::update_scorecard)
                .patch(scorecards::update_scorecard)
                .delete(scorecards::delete_scorecard),
        )
        .layer(from_fn_with_state(
            new_rps_state(state.config.api_rps),
            rps_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .merge(auth_api)
        .merge(api)
        .with_state(state)
        .layer(api_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
