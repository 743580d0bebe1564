use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::{candidate_dto::CandidateName, job_dto::JobTitle, staff_dto::StaffSummary};
use crate::models::scorecard::{ScorecardRating, ScorecardRecord};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateScorecardPayload {
    #[validate(length(min = 1, max = 10000, message = "Notes must be between 1 and 10000 characters long"))]
    pub notes: String,
    pub rating: ScorecardRating,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateScorecardPayload {
    #[validate(length(min = 1, max = 10000, message = "Notes must be between 1 and 10000 characters long"))]
    pub notes: Option<String>,
    pub rating: Option<ScorecardRating>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScorecardInterviewSummary {
    pub id: i32,
    pub candidate: CandidateName,
    pub interviewer: StaffSummary,
    pub job: JobTitle,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScorecardView {
    pub id: i32,
    pub scorecard_datetime: DateTime<Utc>,
    pub interview: ScorecardInterviewSummary,
    pub notes: String,
    pub rating: ScorecardRating,
}

impl From<ScorecardRecord> for ScorecardView {
    fn from(record: ScorecardRecord) -> Self {
        let scorecard = record.scorecard;
        Self {
            id: scorecard.id,
            scorecard_datetime: scorecard.scorecard_datetime,
            interview: ScorecardInterviewSummary {
                id: scorecard.interview_id,
                candidate: CandidateName {
                    name: record.candidate_name,
                },
                interviewer: StaffSummary {
                    name: record.interviewer_name,
                    title: record.interviewer_title,
                },
                job: JobTitle {
                    title: record.job_title,
                },
            },
            notes: scorecard.notes,
            rating: scorecard.rating,
        }
    }
}
