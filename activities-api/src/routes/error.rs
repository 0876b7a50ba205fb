use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::ActivityError;

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::ActivityNotFound(ref name) => {
                tracing::debug!("unknown activity '{}'", name);
                Self::not_found(err.to_string())
            }
            ActivityError::AlreadySignedUp
            | ActivityError::NotSignedUp
            | ActivityError::CapacityExceeded => Self::bad_request(err.to_string()),
            ActivityError::Storage(ref message) => {
                tracing::error!("Activity operation failed: {}", message);
                Self::internal("Internal server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_client_statuses() {
        let cases = [
            (
                ActivityError::ActivityNotFound("Chess Club".into()),
                StatusCode::NOT_FOUND,
                "Activity not found",
            ),
            (
                ActivityError::AlreadySignedUp,
                StatusCode::BAD_REQUEST,
                "Student is already signed up",
            ),
            (
                ActivityError::CapacityExceeded,
                StatusCode::BAD_REQUEST,
                "Activity is at full capacity",
            ),
            (
                ActivityError::NotSignedUp,
                StatusCode::BAD_REQUEST,
                "Student is not signed up for this activity",
            ),
        ];

        for (err, status, message) in cases {
            let api_error = ApiError::from(err);
            assert_eq!(api_error.status, status);
            assert_eq!(api_error.message, message);
        }
    }

    #[test]
    fn storage_errors_are_not_leaked() {
        let api_error = ApiError::from(ActivityError::storage("disk I/O error"));
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api_error.message.contains("disk"));
    }
}
