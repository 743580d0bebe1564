use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// `Json<T>` whose rejections (bad syntax, wrong types, unknown enum values,
/// missing fields) are reported as 400 in the API's error shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(json_rejection_to_error(rejection)),
        }
    }
}

/// `Path<T>` with rejections in the API's error shape.
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err(path_rejection_to_error(rejection)),
        }
    }
}

/// `Query<T>` with rejections in the API's error shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(query_rejection_to_error(rejection)),
        }
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> Error {
    tracing::debug!(error = %rejection, "Rejected request body");
    let text = rejection.body_text();
    if let JsonRejection::JsonDataError(_) = rejection {
        if let Some(field) = missing_field(&text) {
            return Error::MissingField(field);
        }
    }
    Error::BadRequest(text)
}

fn path_rejection_to_error(rejection: PathRejection) -> Error {
    tracing::debug!(error = %rejection, "Rejected path parameters");
    Error::BadRequest(rejection.body_text())
}

fn query_rejection_to_error(rejection: QueryRejection) -> Error {
    tracing::debug!(error = %rejection, "Rejected query string");
    Error::BadRequest(rejection.body_text())
}

/// Pulls `x` out of serde's "missing field `x`" message.
fn missing_field(message: &str) -> Option<String> {
    let rest = message.split_once("missing field `")?.1;
    let (field, _) = rest.split_once('`')?;
    Some(field.to_string())
}
