use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::{candidate_dto::CandidateContact, job_dto::JobTitle};
use crate::models::application::{ApplicationRecord, ApplicationStatus};
use crate::utils::validation::{HTTP_URL_RE, PLAIN_TEXT_RE};

/// A candidate's application. The candidate is always the caller, so any
/// `candidate_id` in the body is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApplicationPayload {
    pub job_id: i32,
    #[validate(
        length(min = 2, max = 50, message = "Location must be between 2 and 50 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Location can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub location: String,
    #[validate(
        length(min = 2, max = 50, message = "Working rights must be between 2 and 50 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Working rights can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub working_rights: String,
    #[validate(
        length(min = 2, max = 50, message = "Notice period must be between 2 and 50 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Notice period can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub notice_period: String,
    #[validate(range(min = 0, message = "Salary expectations must not be negative"))]
    pub salary_expectations: i32,
    #[validate(
        url(message = "Resume must be a valid link"),
        regex(path = *HTTP_URL_RE, message = "Resume must be an http or https link")
    )]
    pub resume: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateApplicationPayload {
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStaffView {
    pub id: i32,
    pub job: JobTitle,
    pub application_date: NaiveDate,
    pub candidate: CandidateContact,
    pub status: ApplicationStatus,
    pub location: String,
    pub working_rights: String,
    pub notice_period: String,
    pub salary_expectations: i32,
    pub resume: String,
}

/// What a candidate sees of their own application: everything except the
/// recruitment stage.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationOwnerView {
    pub id: i32,
    pub job: JobTitle,
    pub application_date: NaiveDate,
    pub candidate: CandidateContact,
    pub location: String,
    pub working_rights: String,
    pub notice_period: String,
    pub salary_expectations: i32,
    pub resume: String,
}

impl From<ApplicationRecord> for ApplicationStaffView {
    fn from(record: ApplicationRecord) -> Self {
        let application = record.application;
        Self {
            id: application.id,
            job: JobTitle {
                title: record.job_title,
            },
            application_date: application.application_date,
            candidate: CandidateContact {
                name: record.candidate_name,
                phone_number: record.candidate_phone,
            },
            status: application.status,
            location: application.location,
            working_rights: application.working_rights,
            notice_period: application.notice_period,
            salary_expectations: application.salary_expectations,
            resume: application.resume,
        }
    }
}

impl From<ApplicationRecord> for ApplicationOwnerView {
    fn from(record: ApplicationRecord) -> Self {
        let application = record.application;
        Self {
            id: application.id,
            job: JobTitle {
                title: record.job_title,
            },
            application_date: application.application_date,
            candidate: CandidateContact {
                name: record.candidate_name,
                phone_number: record.candidate_phone,
            },
            location: application.location,
            working_rights: application.working_rights,
            notice_period: application.notice_period,
            salary_expectations: application.salary_expectations,
            resume: application.resume,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ApplicationView {
    Staff(ApplicationStaffView),
    Owner(ApplicationOwnerView),
}

impl ApplicationView {
    pub fn staff(record: ApplicationRecord) -> Self {
        ApplicationView::Staff(record.into())
    }

    pub fn owner(record: ApplicationRecord) -> Self {
        ApplicationView::Owner(record.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::application::Application;

    fn record() -> ApplicationRecord {
        ApplicationRecord {
            application: Application {
                id: 4,
                job_id: 1,
                candidate_id: 2,
                application_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                status: ApplicationStatus::ManagerInterview,
                location: "Sydney".into(),
                working_rights: "Citizen".into(),
                notice_period: "4 weeks".into(),
                salary_expectations: 120000,
                resume: "https://example.com/cv.pdf".into(),
            },
            job_title: "DevOps Engineer".into(),
            candidate_name: "Maurice Bailey".into(),
            candidate_phone: "0432043448".into(),
        }
    }

    #[test]
    fn staff_view_embeds_job_and_candidate() {
        let json = serde_json::to_value(ApplicationView::staff(record())).unwrap();
        assert_eq!(json["job"]["title"], "DevOps Engineer");
        assert_eq!(json["candidate"]["phone_number"], "0432043448");
        assert_eq!(json["status"], "Manager interview");
        assert_eq!(json["application_date"], "2024-03-01");
        assert!(json.get("candidate_id").is_none());
        assert!(json.get("job_id").is_none());
    }

    #[test]
    fn owner_view_hides_status() {
        let json = serde_json::to_value(ApplicationView::owner(record())).unwrap();
        assert_eq!(json["id"], 4);
        assert!(json.get("status").is_none());
    }

    #[test]
    fn resume_must_be_http_link() {
        let mut payload = CreateApplicationPayload {
            job_id: 1,
            location: "Sydney".into(),
            working_rights: "Citizen".into(),
            notice_period: "4 weeks".into(),
            salary_expectations: 100000,
            resume: "https://example.com/cv.pdf".into(),
        };
        assert!(payload.validate().is_ok());
        payload.resume = "ftp://example.com/cv.pdf".into();
        assert!(payload.validate().is_err());
        payload.resume = "not a link".into();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn unknown_status_is_rejected_on_deserialize() {
        let ok: UpdateApplicationPayload =
            serde_json::from_str(r#"{"status": "Recruiter interview"}"#).unwrap();
        assert_eq!(ok.status, Some(ApplicationStatus::RecruiterInterview));
        assert!(serde_json::from_str::<UpdateApplicationPayload>(r#"{"status": "Hired"}"#).is_err());
    }
}
