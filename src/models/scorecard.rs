use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "scorecard_rating")]
pub enum ScorecardRating {
    #[serde(rename = "Strong Yes")]
    #[sqlx(rename = "Strong Yes")]
    StrongYes,
    Yes,
    #[serde(rename = "No Decision")]
    #[sqlx(rename = "No Decision")]
    NoDecision,
    No,
    #[serde(rename = "Strong No")]
    #[sqlx(rename = "Strong No")]
    StrongNo,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Scorecard {
    pub id: i32,
    pub interview_id: i32,
    pub scorecard_datetime: DateTime<Utc>,
    pub notes: String,
    pub rating: ScorecardRating,
}

#[derive(Debug, Clone, FromRow)]
pub struct ScorecardRecord {
    #[sqlx(flatten)]
    pub scorecard: Scorecard,
    pub interviewer_id: i32,
    pub interviewer_name: String,
    pub interviewer_title: Option<String>,
    pub candidate_name: String,
    pub job_title: String,
}
