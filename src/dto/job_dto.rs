use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::staff_dto::StaffSummary;
use crate::middleware::guard::{owns, Owner};
use crate::models::{
    job::{JobRecord, JobStatus},
    role::Role,
};
use crate::utils::validation::PLAIN_TEXT_RE;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(
        length(min = 4, max = 100, message = "Job title must be between 4 and 100 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Title can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub title: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
    #[validate(
        length(min = 2, max = 50, message = "Department must be between 2 and 50 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Department can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub department: String,
    #[validate(
        length(min = 2, max = 50, message = "Location must be between 2 and 50 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Location can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub location: String,
    #[validate(range(min = 0, message = "Salary budget must not be negative"))]
    pub salary_budget: i32,
    pub hiring_manager_id: i32,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(
        length(min = 4, max = 100, message = "Job title must be between 4 and 100 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Title can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
    #[validate(
        length(min = 2, max = 50, message = "Department must be between 2 and 50 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Department can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub department: Option<String>,
    #[validate(
        length(min = 2, max = 50, message = "Location must be between 2 and 50 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Location can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub location: Option<String>,
    #[validate(range(min = 0, message = "Salary budget must not be negative"))]
    pub salary_budget: Option<i32>,
    pub hiring_manager_id: Option<i32>,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobListQuery {
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobTitle {
    pub title: String,
}

/// Admins and the job's own hiring manager.
#[derive(Debug, Clone, Serialize)]
pub struct JobFullView {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub hiring_manager: StaffSummary,
    pub status: JobStatus,
    pub salary_budget: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobStaffView {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub hiring_manager: StaffSummary,
    pub status: JobStatus,
}

/// Anonymous visitors, candidates and users without a profile.
#[derive(Debug, Clone, Serialize)]
pub struct JobPublicView {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub status: JobStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JobView {
    Full(JobFullView),
    Staff(JobStaffView),
    Public(JobPublicView),
}

impl JobView {
    pub fn project(record: JobRecord, role: Option<&Role>) -> Self {
        let job = record.job;
        let hiring_manager = StaffSummary {
            name: record.hiring_manager_name,
            title: record.hiring_manager_title,
        };
        let full = role.is_some_and(|role| {
            role.is_admin() || owns(role, Owner::Staff(job.hiring_manager_id))
        });

        match role {
            Some(_) if full => JobView::Full(JobFullView {
                id: job.id,
                title: job.title,
                department: job.department,
                location: job.location,
                description: job.description,
                hiring_manager,
                status: job.status,
                salary_budget: job.salary_budget,
            }),
            Some(role) if role.is_staff() => JobView::Staff(JobStaffView {
                id: job.id,
                title: job.title,
                department: job.department,
                location: job.location,
                description: job.description,
                hiring_manager,
                status: job.status,
            }),
            _ => JobView::Public(JobPublicView {
                id: job.id,
                title: job.title,
                department: job.department,
                location: job.location,
                description: job.description,
                status: job.status,
            }),
        }
    }

    pub fn project_all(records: Vec<JobRecord>, role: Option<&Role>) -> Vec<Self> {
        records
            .into_iter()
            .map(|record| Self::project(record, role))
            .collect()
    }
}
