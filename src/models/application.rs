use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Recruitment stage of an application.
///
/// Any stage may be set from any other; only admins change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status")]
pub enum ApplicationStatus {
    #[default]
    #[serde(rename = "To review")]
    #[sqlx(rename = "To review")]
    ToReview,
    #[serde(rename = "Recruiter interview")]
    #[sqlx(rename = "Recruiter interview")]
    RecruiterInterview,
    #[serde(rename = "Manager interview")]
    #[sqlx(rename = "Manager interview")]
    ManagerInterview,
    Offer,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i32,
    pub job_id: i32,
    pub candidate_id: i32,
    pub application_date: NaiveDate,
    pub status: ApplicationStatus,
    pub location: String,
    pub working_rights: String,
    pub notice_period: String,
    pub salary_expectations: i32,
    pub resume: String,
}

/// An application joined with its job title and candidate contact details.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRecord {
    #[sqlx(flatten)]
    pub application: Application,
    pub job_title: String,
    pub candidate_name: String,
    pub candidate_phone: String,
}
