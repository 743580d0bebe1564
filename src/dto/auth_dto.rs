use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterPayload {
    #[validate(
        email(message = "Invalid email address"),
        length(max = 100, message = "Email can only be a maximum of 100 characters long")
    )]
    pub email: String,
    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters long"
    ))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserPayload {
    #[validate(
        email(message = "Invalid email address"),
        length(max = 100, message = "Email can only be a maximum of 100 characters long")
    )]
    pub email: Option<String>,
    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters long"
    ))]
    pub password: Option<String>,
}

/// The only shape a user record is ever returned in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: i32,
    pub email: String,
}

impl From<User> for UserView {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            email: value.email,
        }
    }
}
