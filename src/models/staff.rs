use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Staff {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub title: Option<String>,
    pub admin: bool,
}
