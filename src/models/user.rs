use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Login identity. Carries the password hash, so it is never serialized;
/// responses go through `UserView`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
