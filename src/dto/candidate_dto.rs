use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::candidate::Candidate;
use crate::utils::validation::{PERSON_NAME_RE, PHONE_RE};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCandidatePayload {
    #[validate(
        length(min = 1, max = 100, message = "Name can only be a maximum of 100 characters long"),
        regex(
            path = *PERSON_NAME_RE,
            message = "Name can contain only letters, spaces and hyphens - please try again."
        )
    )]
    pub name: String,
    #[validate(
        length(min = 10, max = 20, message = "Phone number must be between 10-20 characters in length"),
        regex(
            path = *PHONE_RE,
            message = "Phone number can only contain numbers and certain special characters - please try again."
        )
    )]
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCandidatePayload {
    #[validate(
        length(min = 1, max = 100, message = "Name can only be a maximum of 100 characters long"),
        regex(
            path = *PERSON_NAME_RE,
            message = "Name can contain only letters, spaces and hyphens - please try again."
        )
    )]
    pub name: Option<String>,
    #[validate(
        length(min = 10, max = 20, message = "Phone number must be between 10-20 characters in length"),
        regex(
            path = *PHONE_RE,
            message = "Phone number can only contain numbers and certain special characters - please try again."
        )
    )]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateView {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone_number: String,
}

impl From<Candidate> for CandidateView {
    fn from(value: Candidate) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            phone_number: value.phone_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateContact {
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateName {
    pub name: String,
}
