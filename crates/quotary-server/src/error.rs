//! API error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quotary_core::{ProblemDetails, StoreError};
use quotary_render::RenderError;
use thiserror::Error;
use tracing::error;

/// Request-level errors, each mapped to one HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid X-Client-Type header: {0}")]
    InvalidClientType(String),

    #[error("no supported media type in Accept header: {0}")]
    NotAcceptable(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for handler operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Convert API error to Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        match self {
            ApiError::Store(StoreError::NotFound(id)) => {
                ProblemDetails::new(StatusCode::NOT_FOUND, "Quotation Not Found")
                    .with_type("urn:quotary:not-found")
                    .with_detail(format!("No quotation with id {}", id))
            }
            ApiError::Store(StoreError::EmptyField(field)) => {
                ProblemDetails::new(StatusCode::BAD_REQUEST, "Missing Required Field")
                    .with_type("urn:quotary:missing-field")
                    .with_detail(format!("Field '{}' must be present and non-empty", field))
            }
            ApiError::InvalidClientType(value) => {
                ProblemDetails::new(StatusCode::BAD_REQUEST, "Invalid Client Type")
                    .with_type("urn:quotary:invalid-client-type")
                    .with_detail(format!(
                        "X-Client-Type must be 'mobile' or 'laptop', got '{}'",
                        value
                    ))
            }
            ApiError::NotAcceptable(accept) => {
                ProblemDetails::new(StatusCode::NOT_ACCEPTABLE, "Not Acceptable")
                    .with_type("urn:quotary:not-acceptable")
                    .with_detail(format!("No supported media type in '{}'", accept))
            }
            ApiError::Render(err) => {
                ProblemDetails::new(StatusCode::INTERNAL_SERVER_ERROR, "Render Failed")
                    .with_type("urn:quotary:render-failed")
                    .with_detail(err.to_string())
            }
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.to_problem_details().status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);
        let problem = self.to_problem_details();
        let status =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(problem)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::Store(StoreError::NotFound(999));
        let problem = err.to_problem_details();
        assert_eq!(problem.status, 404);
        assert_eq!(problem.title, "Quotation Not Found");
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        let err = ApiError::Store(StoreError::EmptyField("text"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::InvalidClientType("tablet".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_acceptable_maps_to_406() {
        let err = ApiError::NotAcceptable("text/plain".to_string());
        let problem = err.to_problem_details();
        assert_eq!(problem.status, 406);
        assert_eq!(problem.type_uri, "urn:quotary:not-acceptable");
    }
}
