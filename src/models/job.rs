use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_status")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub department: String,
    pub location: String,
    pub status: JobStatus,
    pub salary_budget: i32,
    pub hiring_manager_id: i32,
}

/// A job joined with its hiring manager's name and title.
#[derive(Debug, Clone, FromRow)]
pub struct JobRecord {
    #[sqlx(flatten)]
    pub job: Job,
    pub hiring_manager_name: String,
    pub hiring_manager_title: Option<String>,
}
