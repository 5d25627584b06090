use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::db::{Entity, QueryError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),

    #[error(transparent)]
    InvalidPath(#[from] PathRejection),

    #[error("Answer must be A, B, C or D")]
    InvalidAnswer,

    #[error("Category does not exist")]
    CategoryMissing,

    #[error("Category name already exists")]
    DuplicateCategory,

    #[error("{0} not found")]
    NotFound(Entity),

    #[error("Service temporarily unavailable")]
    Unavailable(#[source] sqlx::Error),

    #[error("Internal server error")]
    Internal(#[source] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::InvalidQuery(_) | ApiError::InvalidPath(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::InvalidAnswer | ApiError::CategoryMissing | ApiError::DuplicateCategory => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NotFound(entity) => ApiError::NotFound(entity),
            QueryError::UniqueViolation(_) => ApiError::DuplicateCategory,
            QueryError::CheckViolation(_) => ApiError::InvalidAnswer,
            QueryError::ForeignKeyViolation(_) => ApiError::CategoryMissing,
            QueryError::Unavailable(e) => ApiError::Unavailable(e),
            QueryError::Database(e) => ApiError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Unavailable(e) => tracing::warn!("Database unavailable: {e}"),
            ApiError::Internal(e) => tracing::error!("Database error: {e}"),
            _ => tracing::debug!("Rejecting request: {self}"),
        }
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_violations_are_client_errors() {
        let cases = [
            (QueryError::UniqueViolation("categories_name_key".into()), StatusCode::BAD_REQUEST),
            (QueryError::CheckViolation("questions_answer_check".into()), StatusCode::BAD_REQUEST),
            (QueryError::ForeignKeyViolation("questions_category_id_fkey".into()), StatusCode::BAD_REQUEST),
            (QueryError::NotFound(Entity::Category), StatusCode::NOT_FOUND),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn infrastructure_failures_hide_details() {
        let unavailable = ApiError::from(QueryError::from(sqlx::Error::PoolTimedOut));
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(unavailable.to_string(), "Service temporarily unavailable");

        let internal = ApiError::from(QueryError::Database(sqlx::Error::RowNotFound));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.to_string(), "Internal server error");
    }

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(ApiError::from(QueryError::UniqueViolation(String::new())).to_string(), "Category name already exists");
        assert_eq!(ApiError::CategoryMissing.to_string(), "Category does not exist");
        assert_eq!(ApiError::NotFound(Entity::Question).to_string(), "Question not found");
    }
}
