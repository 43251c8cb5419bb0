use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("An error occurred while executing a database operation.")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("Failed to apply database migrations.")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// Malformed bodies answer 400 regardless of whether the JSON failed to
/// parse or failed to match the request type.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::SpecificOperationError(_) | AppError::MigrationError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
            return status_code.into_response();
        }
        let body = ErrorResponse {
            message: self.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::EntityNotFound("missing".into()), StatusCode::NOT_FOUND)]
    #[case(AppError::BadRequest("mismatch".into()), StatusCode::BAD_REQUEST)]
    #[case(AppError::UnprocessableEntity("dangling".into()), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(AppError::Conflict("referenced".into()), StatusCode::CONFLICT)]
    #[case(
        AppError::SpecificOperationError(sqlx::Error::PoolTimedOut),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn maps_each_kind_to_its_status(#[case] error: AppError, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
        assert_eq!(error.into_response().status(), expected);
    }
}
