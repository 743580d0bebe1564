use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::{candidate_dto::CandidateContact, job_dto::JobTitle, staff_dto::StaffSummary};
use crate::models::interview::{InterviewFormat, InterviewRecord};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInterviewPayload {
    pub application_id: i32,
    pub interviewer_id: i32,
    pub interview_datetime: NaiveDateTime,
    #[validate(range(min = 1, max = 600, message = "Interview length must be between 1 and 600 minutes"))]
    pub length_mins: i32,
    pub format: InterviewFormat,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInterviewPayload {
    pub interviewer_id: Option<i32>,
    pub interview_datetime: Option<NaiveDateTime>,
    #[validate(range(min = 1, max = 600, message = "Interview length must be between 1 and 600 minutes"))]
    pub length_mins: Option<i32>,
    pub format: Option<InterviewFormat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewApplicationSummary {
    pub job: JobTitle,
    pub candidate: CandidateContact,
    pub location: String,
    pub working_rights: String,
    pub notice_period: String,
    pub salary_expectations: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewStaffView {
    pub id: i32,
    pub application: InterviewApplicationSummary,
    pub interviewer: StaffSummary,
    pub interview_datetime: NaiveDateTime,
    pub length_mins: i32,
    pub format: InterviewFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewCandidateView {
    pub id: i32,
    pub job: JobTitle,
    pub interviewer: StaffSummary,
    pub interview_datetime: NaiveDateTime,
    pub length_mins: i32,
    pub format: InterviewFormat,
}

impl From<InterviewRecord> for InterviewStaffView {
    fn from(record: InterviewRecord) -> Self {
        let interview = record.interview;
        Self {
            id: interview.id,
            application: InterviewApplicationSummary {
                job: JobTitle {
                    title: record.job_title,
                },
                candidate: CandidateContact {
                    name: record.candidate_name,
                    phone_number: record.candidate_phone,
                },
                location: record.application_location,
                working_rights: record.application_working_rights,
                notice_period: record.application_notice_period,
                salary_expectations: record.application_salary_expectations,
            },
            interviewer: StaffSummary {
                name: record.interviewer_name,
                title: record.interviewer_title,
            },
            interview_datetime: interview.interview_datetime,
            length_mins: interview.length_mins,
            format: interview.format,
        }
    }
}

impl From<InterviewRecord> for InterviewCandidateView {
    fn from(record: InterviewRecord) -> Self {
        let interview = record.interview;
        Self {
            id: interview.id,
            job: JobTitle {
                title: record.job_title,
            },
            interviewer: StaffSummary {
                name: record.interviewer_name,
                title: record.interviewer_title,
            },
            interview_datetime: interview.interview_datetime,
            length_mins: interview.length_mins,
            format: interview.format,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum InterviewView {
    Staff(InterviewStaffView),
    Candidate(InterviewCandidateView),
}

impl InterviewView {
    pub fn staff(record: InterviewRecord) -> Self {
        InterviewView::Staff(record.into())
    }

    pub fn candidate(record: InterviewRecord) -> Self {
        InterviewView::Candidate(record.into())
    }
}
