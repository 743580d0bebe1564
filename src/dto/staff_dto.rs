use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::staff::Staff;
use crate::utils::validation::{PERSON_NAME_RE, PLAIN_TEXT_RE};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStaffPayload {
    pub user_id: i32,
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters long"),
        regex(
            path = *PERSON_NAME_RE,
            message = "Name can contain only letters, spaces and hyphens - please try again."
        )
    )]
    pub name: String,
    #[validate(
        length(min = 2, max = 50, message = "Title must be between 2 and 50 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Title can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub title: Option<String>,
    pub admin: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStaffPayload {
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters long"),
        regex(
            path = *PERSON_NAME_RE,
            message = "Name can contain only letters, spaces and hyphens - please try again."
        )
    )]
    pub name: Option<String>,
    #[validate(
        length(min = 2, max = 50, message = "Title must be between 2 and 50 characters long"),
        regex(
            path = *PLAIN_TEXT_RE,
            message = "Title can contain only letters, numbers, spaces and certain special characters - please try again."
        )
    )]
    pub title: Option<String>,
    pub admin: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StaffView {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub title: Option<String>,
    pub admin: bool,
}

impl From<Staff> for StaffView {
    fn from(value: Staff) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            title: value.title,
            admin: value.admin,
        }
    }
}

/// Name and title of a staff member embedded in another record's view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffSummary {
    pub name: String,
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_optional_but_checked_when_present() {
        let mut payload = CreateStaffPayload {
            user_id: 1,
            name: "Elizabeth Riley".into(),
            title: None,
            admin: None,
        };
        assert!(payload.validate().is_ok());
        payload.title = Some("Recruiter; DROP".into());
        assert!(payload.validate().is_err());
        payload.title = Some("Senior Recruiter".into());
        assert!(payload.validate().is_ok());
    }
}
