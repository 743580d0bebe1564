use sqlx::PgPool;

use crate::dto::candidate_dto::{CreateCandidatePayload, UpdateCandidatePayload};
use crate::error::{Error, Result};
use crate::middleware::guard::require_admin;
use crate::models::{candidate::Candidate, role::Role};

const CANDIDATE_COLUMNS: &str = "id, user_id, name, phone_number";

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, role: &Role) -> Result<Vec<Candidate>> {
        require_admin(role)?;
        let candidates = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }

    /// Creates the caller's own profile. A second profile for the same user
    /// is a `Conflict`.
    pub async fn create(&self, user_id: i32, payload: CreateCandidatePayload) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            r#"
            INSERT INTO candidates (user_id, name, phone_number)
            VALUES ($1, $2, $3)
            RETURNING {CANDIDATE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(payload.name)
        .bind(payload.phone_number)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(candidate_id = candidate.id, user_id, "Candidate profile created");
        Ok(candidate)
    }

    pub async fn me(&self, user_id: i32) -> Result<Candidate> {
        sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(no_profile)
    }

    pub async fn update_self(
        &self,
        user_id: i32,
        payload: UpdateCandidatePayload,
    ) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            r#"
            UPDATE candidates
            SET name = COALESCE($2, name),
                phone_number = COALESCE($3, phone_number)
            WHERE user_id = $1
            RETURNING {CANDIDATE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(payload.name)
        .bind(payload.phone_number)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(no_profile)?;

        tracing::info!(candidate_id = candidate.id, "Candidate profile updated");
        Ok(candidate)
    }

    /// Cascades to the candidate's applications and interviews.
    pub async fn delete(&self, role: &Role, id: i32) -> Result<()> {
        require_admin(role)?;
        let deleted =
            sqlx::query_scalar::<_, i32>("DELETE FROM candidates WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        if deleted.is_none() {
            return Err(Error::NotFound(format!("Candidate {} not found", id)));
        }
        tracing::info!(candidate_id = id, "Candidate deleted");
        Ok(())
    }
}

fn no_profile() -> Error {
    Error::NotFound("Candidate profile not found".to_string())
}
