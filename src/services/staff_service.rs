use sqlx::PgPool;

use crate::dto::staff_dto::{CreateStaffPayload, UpdateStaffPayload};
use crate::error::{Error, Result};
use crate::middleware::guard::{require_admin, require_admin_or_owner, Owner};
use crate::models::{role::Role, staff::Staff};

const STAFF_COLUMNS: &str = "id, user_id, name, title, admin";

#[derive(Clone)]
pub struct StaffService {
    pool: PgPool,
}

impl StaffService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, role: &Role) -> Result<Vec<Staff>> {
        require_admin(role)?;
        let staff = sqlx::query_as::<_, Staff>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(staff)
    }

    pub async fn get(&self, role: &Role, id: i32) -> Result<Staff> {
        require_admin_or_owner(role, Some(Owner::Staff(id)))?;
        self.find(id).await
    }

    pub async fn create(&self, role: &Role, payload: CreateStaffPayload) -> Result<Staff> {
        require_admin(role)?;
        let staff = sqlx::query_as::<_, Staff>(&format!(
            r#"
            INSERT INTO staff (user_id, name, title, admin)
            VALUES ($1, $2, $3, $4)
            RETURNING {STAFF_COLUMNS}
            "#
        ))
        .bind(payload.user_id)
        .bind(payload.name)
        .bind(payload.title)
        .bind(payload.admin.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(staff_id = staff.id, user_id = staff.user_id, admin = staff.admin, "Staff member created");
        Ok(staff)
    }

    /// Staff may edit their own name and title; only an admin may touch the
    /// `admin` flag or another member's profile.
    pub async fn update(&self, role: &Role, id: i32, payload: UpdateStaffPayload) -> Result<Staff> {
        if payload.admin.is_some() {
            require_admin(role)?;
        } else {
            require_admin_or_owner(role, Some(Owner::Staff(id)))?;
        }

        let staff = sqlx::query_as::<_, Staff>(&format!(
            r#"
            UPDATE staff
            SET name = COALESCE($2, name),
                title = COALESCE($3, title),
                admin = COALESCE($4, admin)
            WHERE id = $1
            RETURNING {STAFF_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(payload.name)
        .bind(payload.title)
        .bind(payload.admin)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        if let Some(admin) = payload.admin {
            tracing::info!(staff_id = id, admin, "Staff admin flag set");
        }
        tracing::info!(staff_id = id, "Staff member updated");
        Ok(staff)
    }

    /// Fails with `Conflict` while the member manages a job or is booked as
    /// an interviewer.
    pub async fn delete(&self, role: &Role, id: i32) -> Result<()> {
        require_admin(role)?;
        let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM staff WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        if deleted.is_none() {
            return Err(not_found(id));
        }
        tracing::info!(staff_id = id, "Staff member deleted");
        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Staff> {
        sqlx::query_as::<_, Staff>(&format!("SELECT {STAFF_COLUMNS} FROM staff WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i32) -> Error {
    Error::NotFound(format!("Staff member {} not found", id))
}
