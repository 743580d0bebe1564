use sqlx::PgPool;

use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::middleware::guard::{require_admin, require_staff};
use crate::models::{
    job::{JobRecord, JobStatus},
    role::Role,
};

/// Columns of a `JobRecord`, read from `j` (a job row) and `s` (its hiring
/// manager).
const JOB_COLUMNS: &str = r#"
    j.id, j.title, j.description, j.department, j.location, j.status,
    j.salary_budget, j.hiring_manager_id,
    s.name AS hiring_manager_name, s.title AS hiring_manager_title
"#;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_status(&self, status: JobStatus) -> Result<Vec<JobRecord>> {
        let jobs = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs j
            JOIN staff s ON s.id = j.hiring_manager_id
            WHERE j.status = $1
            ORDER BY j.id
            "#
        ))
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    pub async fn list_all(&self) -> Result<Vec<JobRecord>> {
        let jobs = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs j
            JOIN staff s ON s.id = j.hiring_manager_id
            ORDER BY j.id
            "#
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    pub async fn get(&self, id: i32) -> Result<JobRecord> {
        sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs j
            JOIN staff s ON s.id = j.hiring_manager_id
            WHERE j.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, role: &Role, payload: CreateJobPayload) -> Result<JobRecord> {
        require_staff(role)?;
        let job = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            WITH j AS (
                INSERT INTO jobs (
                    title, description, department, location,
                    salary_budget, hiring_manager_id, status
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
            )
            SELECT {JOB_COLUMNS}
            FROM j
            JOIN staff s ON s.id = j.hiring_manager_id
            "#
        ))
        .bind(payload.title)
        .bind(payload.description)
        .bind(payload.department)
        .bind(payload.location)
        .bind(payload.salary_budget)
        .bind(payload.hiring_manager_id)
        .bind(payload.status.unwrap_or_default())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            job_id = job.job.id,
            hiring_manager_id = job.job.hiring_manager_id,
            "Job created"
        );
        Ok(job)
    }

    pub async fn update(&self, role: &Role, id: i32, payload: UpdateJobPayload) -> Result<JobRecord> {
        require_staff(role)?;
        let job = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            WITH j AS (
                UPDATE jobs
                SET title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    department = COALESCE($4, department),
                    location = COALESCE($5, location),
                    salary_budget = COALESCE($6, salary_budget),
                    hiring_manager_id = COALESCE($7, hiring_manager_id),
                    status = COALESCE($8, status)
                WHERE id = $1
                RETURNING *
            )
            SELECT {JOB_COLUMNS}
            FROM j
            JOIN staff s ON s.id = j.hiring_manager_id
            "#
        ))
        .bind(id)
        .bind(payload.title)
        .bind(payload.description)
        .bind(payload.department)
        .bind(payload.location)
        .bind(payload.salary_budget)
        .bind(payload.hiring_manager_id)
        .bind(payload.status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        tracing::info!(job_id = id, status = ?job.job.status, "Job updated");
        Ok(job)
    }

    /// Cascades to the job's applications and everything below them.
    pub async fn delete(&self, role: &Role, id: i32) -> Result<()> {
        require_admin(role)?;
        let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM jobs WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        if deleted.is_none() {
            return Err(not_found(id));
        }
        tracing::info!(job_id = id, "Job deleted");
        Ok(())
    }
}

fn not_found(id: i32) -> Error {
    Error::NotFound(format!("Job {} not found", id))
}
