use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interview_format")]
pub enum InterviewFormat {
    Phone,
    #[serde(rename = "Video call")]
    #[sqlx(rename = "Video call")]
    VideoCall,
    #[serde(rename = "In person")]
    #[sqlx(rename = "In person")]
    InPerson,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub id: i32,
    pub application_id: i32,
    pub candidate_id: i32,
    pub interviewer_id: i32,
    pub interview_datetime: NaiveDateTime,
    pub length_mins: i32,
    pub format: InterviewFormat,
}

#[derive(Debug, Clone, FromRow)]
pub struct InterviewRecord {
    #[sqlx(flatten)]
    pub interview: Interview,
    pub interviewer_name: String,
    pub interviewer_title: Option<String>,
    pub job_title: String,
    pub candidate_name: String,
    pub candidate_phone: String,
    pub application_location: String,
    pub application_working_rights: String,
    pub application_notice_period: String,
    pub application_salary_expectations: i32,
}
