use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use sqlx::error::ErrorKind;
use validator::{ValidationErrors, ValidationErrorsKind};

pub type Result<T> = std::result::Result<T, Error>;

const TABLES: [&str; 7] = [
    "users",
    "staff",
    "candidates",
    "jobs",
    "applications",
    "interviews",
    "scorecards",
];

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("The '{0}' field is required, please try again.")]
    MissingField(String),

    #[error("Invalid {0} provided, please try again.")]
    InvalidReference(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Too many requests")]
    RateLimited,

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn forbidden() -> Self {
        Error::Forbidden("Not authorised to perform this action".to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, field) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Error::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            Error::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            Error::InvalidInput { field, reason } => (StatusCode::BAD_REQUEST, reason, Some(field)),
            Error::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("The '{}' field is required, please try again.", field),
                Some(field),
            ),
            Error::InvalidReference(field) => (
                StatusCode::NOT_FOUND,
                format!("Invalid {} provided, please try again.", field),
                Some(field),
            ),
            Error::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            Error::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limit_exceeded".to_string(),
                None,
            ),
            Error::Database(err) => {
                tracing::error!(error = %err, "Unhandled database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
            other => {
                tracing::error!(error = %other, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        let body = match field {
            Some(field) => Json(json!({ "error": error_message, "field": field })),
            None => Json(json!({ "error": error_message })),
        };
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                let column = db_err
                    .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
                    .and_then(|pg| pg.column())
                    .map(str::to_string);
                let constraint = db_err.constraint().map(str::to_string);
                match classify_constraint(
                    db_err.kind(),
                    db_err.message(),
                    constraint.as_deref(),
                    column.as_deref(),
                ) {
                    Some(classified) => classified,
                    None => Error::Database(sqlx::Error::Database(db_err)),
                }
            }
            other => Error::Database(other),
        }
    }
}

/// Maps a constraint violation reported by Postgres onto the API error taxonomy.
fn classify_constraint(
    kind: ErrorKind,
    message: &str,
    constraint: Option<&str>,
    column: Option<&str>,
) -> Option<Error> {
    let field = || {
        column
            .map(str::to_string)
            .or_else(|| constraint.map(field_from_constraint))
            .unwrap_or_else(|| "unknown".to_string())
    };

    match kind {
        ErrorKind::UniqueViolation => Some(Error::Conflict(unique_message(constraint))),
        ErrorKind::ForeignKeyViolation => {
            // Raised on the referenced table when a RESTRICT key blocks a delete.
            if message.starts_with("update or delete on table") {
                Some(Error::Conflict(
                    "Record is still referenced by other records and cannot be removed".to_string(),
                ))
            } else {
                Some(Error::InvalidReference(field()))
            }
        }
        ErrorKind::NotNullViolation => Some(Error::MissingField(field())),
        ErrorKind::CheckViolation => Some(Error::InvalidInput {
            field: field(),
            reason: "Value is out of the allowed range".to_string(),
        }),
        _ => None,
    }
}

fn unique_message(constraint: Option<&str>) -> String {
    match constraint {
        Some("users_email_key") => {
            "Email address already in use, please login or register with a different email."
                .to_string()
        }
        Some("candidates_user_id_key") => {
            "Candidate record already exists for this user id".to_string()
        }
        Some("staff_user_id_key") => "Staff record already exists for this user id".to_string(),
        Some("scorecards_interview_id_key") => {
            "A scorecard already exists for this interview".to_string()
        }
        _ => "Record already exists".to_string(),
    }
}

/// `applications_job_id_fkey` -> `job_id`
pub(crate) fn field_from_constraint(constraint: &str) -> String {
    let trimmed = constraint
        .strip_suffix("_fkey")
        .or_else(|| constraint.strip_suffix("_key"))
        .unwrap_or(constraint);
    TABLES
        .iter()
        .find_map(|table| trimmed.strip_prefix(&format!("{table}_")).map(str::to_string))
        .unwrap_or_else(|| trimmed.to_string())
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .errors()
            .iter()
            .filter_map(|(field, kind)| match kind {
                ValidationErrorsKind::Field(list) => list.first().map(|e| {
                    let reason = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed '{}' validation", e.code));
                    (field.to_string(), reason)
                }),
                _ => None,
            })
            .collect();
        fields.sort();

        match fields.into_iter().next() {
            Some((field, reason)) => Error::InvalidInput { field, reason },
            None => Error::BadRequest(errors.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn foreign_key_constraint_names_map_to_columns() {
        assert_eq!(field_from_constraint("applications_job_id_fkey"), "job_id");
        assert_eq!(
            field_from_constraint("jobs_hiring_manager_id_fkey"),
            "hiring_manager_id"
        );
        assert_eq!(
            field_from_constraint("interviews_interviewer_id_fkey"),
            "interviewer_id"
        );
        assert_eq!(field_from_constraint("users_email_key"), "email");
        assert_eq!(field_from_constraint("something_else"), "something_else");
    }

    #[test]
    fn insert_with_dangling_key_is_invalid_reference() {
        let err = classify_constraint(
            ErrorKind::ForeignKeyViolation,
            "insert or update on table \"applications\" violates foreign key constraint \"applications_job_id_fkey\"",
            Some("applications_job_id_fkey"),
            None,
        );
        assert!(matches!(err, Some(Error::InvalidReference(f)) if f == "job_id"));
    }

    #[test]
    fn blocked_delete_is_conflict() {
        let err = classify_constraint(
            ErrorKind::ForeignKeyViolation,
            "update or delete on table \"staff\" violates foreign key constraint \"jobs_hiring_manager_id_fkey\" on table \"jobs\"",
            Some("jobs_hiring_manager_id_fkey"),
            None,
        );
        assert!(matches!(err, Some(Error::Conflict(_))));
    }

    #[test]
    fn not_null_prefers_reported_column() {
        let err = classify_constraint(
            ErrorKind::NotNullViolation,
            "null value in column \"title\"",
            None,
            Some("title"),
        );
        assert!(matches!(err, Some(Error::MissingField(f)) if f == "title"));
    }

    #[test]
    fn unique_violations_are_conflicts_with_friendly_messages() {
        let err = classify_constraint(
            ErrorKind::UniqueViolation,
            "duplicate key value",
            Some("scorecards_interview_id_key"),
            None,
        );
        match err {
            Some(Error::Conflict(msg)) => assert!(msg.contains("scorecard")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(classify_constraint(ErrorKind::Other, "boom", None, None).is_none());
    }

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 4, message = "too short"))]
        title: String,
    }

    #[test]
    fn validation_errors_name_the_field() {
        let errors = Probe {
            title: "ab".into(),
        }
        .validate()
        .unwrap_err();
        match Error::from(errors) {
            Error::InvalidInput { field, reason } => {
                assert_eq!(field, "title");
                assert_eq!(reason, "too short");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn row_not_found_is_not_found() {
        assert!(matches!(
            Error::from(sqlx::Error::RowNotFound),
            Error::NotFound(_)
        ));
    }
}
