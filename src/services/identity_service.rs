use sqlx::PgPool;

use crate::dto::auth_dto::{LoginPayload, RegisterPayload, UpdateUserPayload};
use crate::error::{Error, Result};
use crate::middleware::guard::{require_admin, require_staff};
use crate::models::{role::Role, user::User};
use crate::utils::crypto::{hash_password_blocking, verify_password_blocking};

const USER_COLUMNS: &str = "id, email, password_hash, created_at";

/// Credentials and the user accounts they belong to.
#[derive(Clone)]
pub struct IdentityService {
    pool: PgPool,
}

impl IdentityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<User> {
        let password_hash = hash_password_blocking(payload.password).await?;
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING {USER_COLUMNS}"
        ))
        .bind(normalize_email(&payload.email))
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Unknown email and wrong password fail the same way.
    pub async fn login(&self, payload: LoginPayload) -> Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(normalize_email(&payload.email))
        .fetch_optional(&self.pool)
        .await?;

        let Some(user) = user else {
            tracing::warn!("Login attempt for unknown email");
            return Err(invalid_credentials());
        };

        if !verify_password_blocking(payload.password, user.password_hash.clone()).await? {
            tracing::warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(invalid_credentials());
        }

        tracing::info!(user_id = user.id, "User logged in");
        Ok(user)
    }

    pub async fn find_user(&self, id: i32) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn list(&self, role: &Role) -> Result<Vec<User>> {
        require_staff(role)?;
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn update_self(&self, user_id: i32, payload: UpdateUserPayload) -> Result<User> {
        let password_hash = match payload.password {
            Some(password) => Some(hash_password_blocking(password).await?),
            None => None,
        };

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                password_hash = COALESCE($3, password_hash)
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(payload.email.as_deref().map(normalize_email))
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        tracing::info!(user_id, "User updated own account");
        Ok(user)
    }

    /// Removes the account and, through the schema, its Staff and Candidate
    /// profiles.
    pub async fn delete(&self, role: &Role, id: i32) -> Result<()> {
        require_admin(role)?;
        let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM users WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        if deleted.is_none() {
            return Err(Error::NotFound(format!("User {} not found", id)));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

/// Addresses are stored and looked up trimmed and lowercased.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn invalid_credentials() -> Error {
    Error::Unauthenticated("Incorrect email or password".to_string())
}
