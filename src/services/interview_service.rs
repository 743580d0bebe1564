use sqlx::PgPool;

use crate::dto::interview_dto::{CreateInterviewPayload, InterviewView, UpdateInterviewPayload};
use crate::error::{Error, Result};
use crate::middleware::guard::{owns, require_admin, require_staff, Owner};
use crate::models::{interview::InterviewRecord, role::Role};

const INTERVIEW_COLUMNS: &str = r#"
    i.id, i.application_id, i.candidate_id, i.interviewer_id,
    i.interview_datetime, i.length_mins, i.format,
    s.name AS interviewer_name, s.title AS interviewer_title,
    j.title AS job_title, c.name AS candidate_name, c.phone_number AS candidate_phone,
    a.location AS application_location,
    a.working_rights AS application_working_rights,
    a.notice_period AS application_notice_period,
    a.salary_expectations AS application_salary_expectations
"#;

const INTERVIEW_JOINS: &str = r#"
    JOIN staff s ON s.id = i.interviewer_id
    JOIN applications a ON a.id = i.application_id
    JOIN jobs j ON j.id = a.job_id
    JOIN candidates c ON c.id = i.candidate_id
"#;

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self, role: &Role) -> Result<Vec<InterviewView>> {
        require_admin(role)?;
        let records = sqlx::query_as::<_, InterviewRecord>(&format!(
            r#"
            SELECT {INTERVIEW_COLUMNS}
            FROM interviews i
            {INTERVIEW_JOINS}
            ORDER BY i.interview_datetime, i.id
            "#
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(InterviewView::staff).collect())
    }

    /// Interviews the caller conducts (staff) or attends (candidate).
    pub async fn mine(&self, role: &Role) -> Result<Vec<InterviewView>> {
        let (filter, id, project): (&str, i32, fn(InterviewRecord) -> InterviewView) = match role {
            Role::Staff(staff) => ("i.interviewer_id = $1", staff.id, InterviewView::staff),
            Role::Candidate(candidate) => {
                ("i.candidate_id = $1", candidate.id, InterviewView::candidate)
            }
            Role::Unassigned => return Ok(Vec::new()),
        };

        let records = sqlx::query_as::<_, InterviewRecord>(&format!(
            r#"
            SELECT {INTERVIEW_COLUMNS}
            FROM interviews i
            {INTERVIEW_JOINS}
            WHERE {filter}
            ORDER BY i.interview_datetime, i.id
            "#
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(project).collect())
    }

    /// Admins see any interview; otherwise only the assigned interviewer or
    /// the interviewed candidate, and a missing id is indistinguishable from
    /// someone else's.
    pub async fn get(&self, role: &Role, id: i32) -> Result<InterviewView> {
        let record = self.find(id).await?;
        match record {
            Some(record) if role.is_admin() => Ok(InterviewView::staff(record)),
            None if role.is_admin() => Err(not_found(id)),
            Some(record) if owns(role, Owner::Staff(record.interview.interviewer_id)) => {
                Ok(InterviewView::staff(record))
            }
            Some(record) if owns(role, Owner::Candidate(record.interview.candidate_id)) => {
                Ok(InterviewView::candidate(record))
            }
            _ => {
                tracing::warn!(role = role.label(), interview_id = id, "Interview read denied");
                Err(Error::forbidden())
            }
        }
    }

    /// Books an interview for an application. The candidate is copied from
    /// the application inside the same transaction.
    pub async fn create(&self, role: &Role, payload: CreateInterviewPayload) -> Result<InterviewView> {
        require_staff(role)?;
        let mut tx = self.pool.begin().await?;

        let candidate_id = sqlx::query_scalar::<_, i32>(
            "SELECT candidate_id FROM applications WHERE id = $1 FOR SHARE",
        )
        .bind(payload.application_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::InvalidReference("application_id".to_string()))?;

        let interview_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO interviews (
                application_id, candidate_id, interviewer_id,
                interview_datetime, length_mins, format
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(payload.application_id)
        .bind(candidate_id)
        .bind(payload.interviewer_id)
        .bind(payload.interview_datetime)
        .bind(payload.length_mins)
        .bind(payload.format)
        .fetch_one(&mut *tx)
        .await?;

        let record = sqlx::query_as::<_, InterviewRecord>(&format!(
            "SELECT {INTERVIEW_COLUMNS} FROM interviews i {INTERVIEW_JOINS} WHERE i.id = $1"
        ))
        .bind(interview_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            interview_id,
            application_id = payload.application_id,
            candidate_id,
            interviewer_id = payload.interviewer_id,
            "Interview scheduled"
        );
        Ok(InterviewView::staff(record))
    }

    /// Reschedules or reassigns. The application and candidate never change.
    pub async fn update(
        &self,
        role: &Role,
        id: i32,
        payload: UpdateInterviewPayload,
    ) -> Result<InterviewView> {
        require_admin(role)?;
        let record = sqlx::query_as::<_, InterviewRecord>(&format!(
            r#"
            WITH i AS (
                UPDATE interviews
                SET interviewer_id = COALESCE($2, interviewer_id),
                    interview_datetime = COALESCE($3, interview_datetime),
                    length_mins = COALESCE($4, length_mins),
                    format = COALESCE($5, format)
                WHERE id = $1
                RETURNING *
            )
            SELECT {INTERVIEW_COLUMNS}
            FROM i
            {INTERVIEW_JOINS}
            "#
        ))
        .bind(id)
        .bind(payload.interviewer_id)
        .bind(payload.interview_datetime)
        .bind(payload.length_mins)
        .bind(payload.format)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        tracing::info!(interview_id = id, "Interview updated");
        Ok(InterviewView::staff(record))
    }

    pub async fn delete(&self, role: &Role, id: i32) -> Result<()> {
        require_admin(role)?;
        let deleted =
            sqlx::query_scalar::<_, i32>("DELETE FROM interviews WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        if deleted.is_none() {
            return Err(not_found(id));
        }
        tracing::info!(interview_id = id, "Interview deleted");
        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Option<InterviewRecord>> {
        let record = sqlx::query_as::<_, InterviewRecord>(&format!(
            "SELECT {INTERVIEW_COLUMNS} FROM interviews i {INTERVIEW_JOINS} WHERE i.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }
}

fn not_found(id: i32) -> Error {
    Error::NotFound(format!("Interview {} not found", id))
}
