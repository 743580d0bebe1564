pub mod application_dto;
pub mod auth_dto;
pub mod candidate_dto;
pub mod interview_dto;
pub mod job_dto;
pub mod scorecard_dto;
pub mod staff_dto;

use serde::Serialize;

/// Result of a "mine" query: the caller's records, or a message when there
/// is nothing to show.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Items(Vec<T>),
    Empty { message: String },
}

impl<T> Listing<T> {
    pub fn or_message(items: Vec<T>, message: &str) -> Self {
        if items.is_empty() {
            Listing::Empty {
                message: message.to_string(),
            }
        } else {
            Listing::Items(items)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
