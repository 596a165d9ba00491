use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Provider kept throttling after all retry attempts were spent.
    #[error("Rate limited by completion provider: {0}")]
    RateLimited(String),

    /// Any non-throttling provider failure: network, auth, 5xx.
    #[error("Failed to generate completion: {0}")]
    GenerationFailed(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::RateLimited(_) => "RATE_LIMITED",
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub error_code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            error_code: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::assert_error_status;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::RateLimited("test".into()).status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AppError::GenerationFailed("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_every_variant_maps_to_an_error_status() {
        let errors = [
            AppError::ValidationError("x".into()),
            AppError::RateLimited("x".into()),
            AppError::GenerationFailed("x".into()),
        ];
        for err in errors {
            assert_error_status(err.status_code());
        }
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::RateLimited("429 from provider".into());
        assert_eq!(
            err.to_string(),
            "Rate limited by completion provider: 429 from provider"
        );
    }

    #[test]
    fn test_error_body_carries_category_code() {
        let body = ErrorResponse {
            error: AppError::GenerationFailed("x".into()).to_string(),
            code: 502,
            error_code: AppError::GenerationFailed("x".into()).error_code(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], 502);
        assert_eq!(json["error_code"], "GENERATION_FAILED");
    }
}
