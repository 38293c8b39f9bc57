use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use qna_core::types::DbId;

use crate::error::AppError;

/// The `{id}` path segment as a record id.
///
/// A segment that is not a valid id cannot name a record, so it is a 404 in
/// the usual `{error, code}` shape rather than axum's plain-text 400.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for RecordId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(RecordId(id)),
            Err(PathRejection::FailedToDeserializePathParams(e)) => {
                tracing::debug!(error = %e.body_text(), "Unparsable record id");
                Err(AppError::NotFound(
                    "No record matches the requested id".to_string(),
                ))
            }
            Err(other) => Err(AppError::InternalError(format!(
                "Route is missing its id parameter: {}",
                other.body_text()
            ))),
        }
    }
}
