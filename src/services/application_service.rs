use sqlx::PgPool;

use crate::dto::application_dto::{
    ApplicationView, CreateApplicationPayload, UpdateApplicationPayload,
};
use crate::error::{Error, Result};
use crate::middleware::guard::{owns, require_admin, require_staff, Owner};
use crate::models::{application::ApplicationRecord, role::Role};

/// Columns of an `ApplicationRecord`, read from `a` (an application row),
/// `j` (its job) and `c` (its candidate).
const APPLICATION_COLUMNS: &str = r#"
    a.id, a.job_id, a.candidate_id, a.application_date, a.status,
    a.location, a.working_rights, a.notice_period, a.salary_expectations, a.resume,
    j.title AS job_title, c.name AS candidate_name, c.phone_number AS candidate_phone
"#;

const APPLICATION_JOINS: &str = r#"
    JOIN jobs j ON j.id = a.job_id
    JOIN candidates c ON c.id = a.candidate_id
"#;

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, role: &Role) -> Result<Vec<ApplicationView>> {
        require_admin(role)?;
        let records = sqlx::query_as::<_, ApplicationRecord>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM applications a
            {APPLICATION_JOINS}
            ORDER BY a.application_date, a.id
            "#
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(ApplicationView::staff).collect())
    }

    /// Staff see any application; a candidate sees only their own, without
    /// its status.
    pub async fn get(&self, role: &Role, id: i32) -> Result<ApplicationView> {
        let record = self.find(id).await?;
        match (role, record) {
            (Role::Staff(_), Some(record)) => Ok(ApplicationView::staff(record)),
            (Role::Staff(_), None) => Err(not_found(id)),
            (_, Some(record))
                if owns(role, Owner::Candidate(record.application.candidate_id)) =>
            {
                Ok(ApplicationView::owner(record))
            }
            _ => {
                tracing::warn!(role = role.label(), application_id = id, "Application read denied");
                Err(Error::forbidden())
            }
        }
    }

    /// A candidate's own applications, or the applications to jobs a staff
    /// member manages. Empty for a user with no profile.
    pub async fn mine(&self, role: &Role) -> Result<Vec<ApplicationView>> {
        let (filter, id, project): (&str, i32, fn(ApplicationRecord) -> ApplicationView) =
            match role {
                Role::Candidate(candidate) => {
                    ("a.candidate_id = $1", candidate.id, ApplicationView::owner)
                }
                Role::Staff(staff) => ("j.hiring_manager_id = $1", staff.id, ApplicationView::staff),
                Role::Unassigned => return Ok(Vec::new()),
            };

        let records = sqlx::query_as::<_, ApplicationRecord>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM applications a
            {APPLICATION_JOINS}
            WHERE {filter}
            ORDER BY a.application_date, a.id
            "#
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(project).collect())
    }

    pub async fn for_job(&self, role: &Role, job_id: i32) -> Result<Vec<ApplicationView>> {
        require_staff(role)?;
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1)")
            .bind(job_id)
            .fetch_one(&self.pool)
            .await?;
        if !exists {
            return Err(Error::NotFound(format!("Job {} not found", job_id)));
        }

        let records = sqlx::query_as::<_, ApplicationRecord>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM applications a
            {APPLICATION_JOINS}
            WHERE a.job_id = $1
            ORDER BY a.application_date, a.id
            "#
        ))
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(ApplicationView::staff).collect())
    }

    /// Files an application for the caller's own candidate profile. The
    /// candidate is looked up by user id so staff who also hold a candidate
    /// profile can apply too.
    pub async fn create(&self, user_id: i32, payload: CreateApplicationPayload) -> Result<ApplicationView> {
        let candidate_id = sqlx::query_scalar::<_, i32>("SELECT id FROM candidates WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                Error::Forbidden("A candidate profile must be created before applying".to_string())
            })?;

        let record = sqlx::query_as::<_, ApplicationRecord>(&format!(
            r#"
            WITH a AS (
                INSERT INTO applications (
                    job_id, candidate_id, location, working_rights,
                    notice_period, salary_expectations, resume
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
            )
            SELECT {APPLICATION_COLUMNS}
            FROM a
            {APPLICATION_JOINS}
            "#
        ))
        .bind(payload.job_id)
        .bind(candidate_id)
        .bind(payload.location)
        .bind(payload.working_rights)
        .bind(payload.notice_period)
        .bind(payload.salary_expectations)
        .bind(payload.resume)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            application_id = record.application.id,
            job_id = record.application.job_id,
            candidate_id,
            "Application submitted"
        );
        Ok(ApplicationView::owner(record))
    }

    /// Any status may follow any other.
    pub async fn update_status(
        &self,
        role: &Role,
        id: i32,
        payload: UpdateApplicationPayload,
    ) -> Result<ApplicationView> {
        require_admin(role)?;
        let record = sqlx::query_as::<_, ApplicationRecord>(&format!(
            r#"
            WITH a AS (
                UPDATE applications
                SET status = COALESCE($2, status)
                WHERE id = $1
                RETURNING *
            )
            SELECT {APPLICATION_COLUMNS}
            FROM a
            {APPLICATION_JOINS}
            "#
        ))
        .bind(id)
        .bind(payload.status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        tracing::info!(
            application_id = id,
            status = ?record.application.status,
            "Application status changed"
        );
        Ok(ApplicationView::staff(record))
    }

    /// Cascades to the application's interviews and their scorecards.
    pub async fn delete(&self, role: &Role, id: i32) -> Result<()> {
        require_admin(role)?;
        let deleted =
            sqlx::query_scalar::<_, i32>("DELETE FROM applications WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        if deleted.is_none() {
            return Err(not_found(id));
        }
        tracing::info!(application_id = id, "Application deleted");
        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Option<ApplicationRecord>> {
        let record = sqlx::query_as::<_, ApplicationRecord>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM applications a
            {APPLICATION_JOINS}
            WHERE a.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }
}

fn not_found(id: i32) -> Error {
    Error::NotFound(format!("Application {} not found", id))
}
