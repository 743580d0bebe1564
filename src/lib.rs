pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::services::{
    application_service::ApplicationService, candidate_service::CandidateService,
    identity_service::IdentityService, interview_service::InterviewService,
    job_service::JobService, role_service::RoleService, scorecard_service::ScorecardService,
    staff_service::StaffService,
};
use crate::utils::token::TokenIssuer;

/// Everything a request handler depends on, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub tokens: TokenIssuer,
    pub identity_service: IdentityService,
    pub role_service: RoleService,
    pub staff_service: StaffService,
    pub candidate_service: CandidateService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub interview_service: InterviewService,
    pub scorecard_service: ScorecardService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let tokens = TokenIssuer::new(&config.jwt_secret, config.jwt_ttl_hours);

        Self {
            identity_service: IdentityService::new(pool.clone()),
            role_service: RoleService::new(pool.clone()),
            staff_service: StaffService::new(pool.clone()),
            candidate_service: CandidateService::new(pool.clone()),
            job_service: JobService::new(pool.clone()),
            application_service: ApplicationService::new(pool.clone()),
            interview_service: InterviewService::new(pool.clone()),
            scorecard_service: ScorecardService::new(pool.clone()),
            tokens,
            config: Arc::new(config),
            pool,
        }
    }
}
