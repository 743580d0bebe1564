use sqlx::PgPool;

use crate::error::Result;
use crate::models::{candidate::Candidate, role::Role, staff::Staff};

#[derive(Clone)]
pub struct RoleService {
    pool: PgPool,
}

impl RoleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Staff wins over Candidate when a user holds both profiles.
    pub async fn resolve(&self, user_id: i32) -> Result<Role> {
        if let Some(staff) = self.staff_for_user(user_id).await? {
            return Ok(Role::Staff(staff));
        }
        if let Some(candidate) = self.candidate_for_user(user_id).await? {
            return Ok(Role::Candidate(candidate));
        }
        Ok(Role::Unassigned)
    }

    pub async fn staff_for_user(&self, user_id: i32) -> Result<Option<Staff>> {
        let staff = sqlx::query_as::<_, Staff>(
            "SELECT id, user_id, name, title, admin FROM staff WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(staff)
    }

    pub async fn candidate_for_user(&self, user_id: i32) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(
            "SELECT id, user_id, name, phone_number FROM candidates WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(candidate)
    }
}
