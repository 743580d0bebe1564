use sqlx::{PgPool, Postgres, Transaction};

use crate::dto::scorecard_dto::{CreateScorecardPayload, ScorecardView, UpdateScorecardPayload};
use crate::error::{Error, Result};
use crate::middleware::guard::{require_admin, require_admin_or_owner, require_owner, require_staff, Owner};
use crate::models::{role::Role, scorecard::ScorecardRecord};

const SCORECARD_COLUMNS: &str = r#"
    sc.id, sc.interview_id, sc.scorecard_datetime, sc.notes, sc.rating,
    i.interviewer_id, s.name AS interviewer_name, s.title AS interviewer_title,
    c.name AS candidate_name, j.title AS job_title
"#;

const SCORECARD_JOINS: &str = r#"
    JOIN interviews i ON i.id = sc.interview_id
    JOIN staff s ON s.id = i.interviewer_id
    JOIN candidates c ON c.id = i.candidate_id
    JOIN applications a ON a.id = i.application_id
    JOIN jobs j ON j.id = a.job_id
"#;

/// Scorecards are addressed by their interview: there is at most one per
/// interview, and only its interviewer may write it.
#[derive(Clone)]
pub struct ScorecardService {
    pool: PgPool,
}

impl ScorecardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, role: &Role, interview_id: i32) -> Result<ScorecardView> {
        let interviewer = self.interviewer_of(interview_id).await?;
        require_admin_or_owner(role, interviewer.map(Owner::Staff))?;
        if interviewer.is_none() {
            return Err(interview_not_found(interview_id));
        }

        let record = sqlx::query_as::<_, ScorecardRecord>(&format!(
            "SELECT {SCORECARD_COLUMNS} FROM scorecards sc {SCORECARD_JOINS} WHERE sc.interview_id = $1"
        ))
        .bind(interview_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| scorecard_not_found(interview_id))?;
        Ok(record.into())
    }

    /// The interview row is locked for the duration so that concurrent
    /// attempts see each other's scorecard; the unique key on
    /// `interview_id` backs this up.
    pub async fn create(
        &self,
        role: &Role,
        interview_id: i32,
        payload: CreateScorecardPayload,
    ) -> Result<ScorecardView> {
        require_staff(role)?;
        let mut tx = self.pool.begin().await?;

        let interviewer = sqlx::query_scalar::<_, i32>(
            "SELECT interviewer_id FROM interviews WHERE id = $1 FOR UPDATE",
        )
        .bind(interview_id)
        .fetch_optional(&mut *tx)
        .await?;
        require_owner(role, interviewer.map(Owner::Staff))?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM scorecards WHERE interview_id = $1)",
        )
        .bind(interview_id)
        .fetch_one(&mut *tx)
        .await?;
        if exists {
            return Err(Error::Conflict(
                "A scorecard already exists for this interview".to_string(),
            ));
        }

        let scorecard_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO scorecards (interview_id, notes, rating) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(interview_id)
        .bind(payload.notes)
        .bind(payload.rating)
        .fetch_one(&mut *tx)
        .await?;

        let record = Self::record_by_id(&mut tx, scorecard_id).await?;
        tx.commit().await?;

        tracing::info!(scorecard_id, interview_id, rating = ?record.scorecard.rating, "Scorecard written");
        Ok(record.into())
    }

    pub async fn update(
        &self,
        role: &Role,
        interview_id: i32,
        payload: UpdateScorecardPayload,
    ) -> Result<ScorecardView> {
        let interviewer = self.interviewer_of(interview_id).await?;
        require_owner(role, interviewer.map(Owner::Staff))?;

        let mut tx = self.pool.begin().await?;
        let scorecard_id = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE scorecards
            SET notes = COALESCE($2, notes),
                rating = COALESCE($3, rating)
            WHERE interview_id = $1
            RETURNING id
            "#,
        )
        .bind(interview_id)
        .bind(payload.notes)
        .bind(payload.rating)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| scorecard_not_found(interview_id))?;

        let record = Self::record_by_id(&mut tx, scorecard_id).await?;
        tx.commit().await?;

        tracing::info!(scorecard_id, interview_id, "Scorecard updated");
        Ok(record.into())
    }

    pub async fn delete(&self, role: &Role, interview_id: i32) -> Result<()> {
        require_admin(role)?;
        let deleted = sqlx::query_scalar::<_, i32>(
            "DELETE FROM scorecards WHERE interview_id = $1 RETURNING id",
        )
        .bind(interview_id)
        .fetch_optional(&self.pool)
        .await?;
        if deleted.is_none() {
            return Err(scorecard_not_found(interview_id));
        }
        tracing::info!(interview_id, "Scorecard deleted");
        Ok(())
    }

    async fn interviewer_of(&self, interview_id: i32) -> Result<Option<i32>> {
        let interviewer =
            sqlx::query_scalar::<_, i32>("SELECT interviewer_id FROM interviews WHERE id = $1")
                .bind(interview_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(interviewer)
    }

    async fn record_by_id(
        tx: &mut Transaction<'_, Postgres>,
        scorecard_id: i32,
    ) -> Result<ScorecardRecord> {
        let record = sqlx::query_as::<_, ScorecardRecord>(&format!(
            "SELECT {SCORECARD_COLUMNS} FROM scorecards sc {SCORECARD_JOINS} WHERE sc.id = $1"
        ))
        .bind(scorecard_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(record)
    }
}

fn interview_not_found(id: i32) -> Error {
    Error::NotFound(format!("Interview {} not found", id))
}

fn scorecard_not_found(interview_id: i32) -> Error {
    Error::NotFound(format!("No scorecard for interview {}", interview_id))
}
