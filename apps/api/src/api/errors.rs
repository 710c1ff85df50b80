use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::ApplicationError;
use crate::domain::errors::DomainError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, code, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "code": self.code,
        }));

        (self.status, body).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        let message = err.to_string();
        match err {
            ApplicationError::Validation(_) => Self::bad_request("validation_error", message),
            ApplicationError::Domain(DomainError::DuplicateTeamName(_)) => {
                Self::conflict("duplicate_team_name", message)
            }
            ApplicationError::Domain(e) => Self::bad_request(e.code(), message),
            ApplicationError::TeamNotFound(_) => Self::not_found("team_not_found", message),
            ApplicationError::MemberNotFound(_) => Self::not_found("member_not_found", message),
            ApplicationError::MemberNotEnrolled(_) => {
                Self::bad_request("member_not_enrolled", message)
            }
            ApplicationError::Repository(_) => {
                tracing::error!(error = %message, "Repository failure");
                Self::internal_server_error(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;

    #[test]
    fn maps_error_kinds_to_status() {
        let cases = [
            (
                ApplicationError::Validation(ValidationError::Required {
                    field: "team_name",
                    value: String::new(),
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApplicationError::Domain(DomainError::PairFormationMismatch),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApplicationError::Domain(DomainError::DuplicateTeamName("ABC".into())),
                StatusCode::CONFLICT,
            ),
            (ApplicationError::TeamNotFound("x".into()), StatusCode::NOT_FOUND),
            (
                ApplicationError::Repository("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn domain_errors_carry_their_code() {
        let err = ApiError::from(ApplicationError::Domain(DomainError::NoPendingPairFormation));

        assert_eq!(err.code, "no_pending_pair_formation");
    }
}
