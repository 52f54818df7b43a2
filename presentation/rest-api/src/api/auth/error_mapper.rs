use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            AuthError::MissingFields | AuthError::InvalidEmail | AuthError::PasswordTooShort => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            AuthError::EmailAlreadyExists => (StatusCode::BAD_REQUEST, "Conflict"),
            AuthError::InvalidCredentials => (StatusCode::BAD_REQUEST, "InvalidCredentials"),
            AuthError::MissingToken => (StatusCode::FORBIDDEN, "Forbidden"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AuthError::PasswordHash | AuthError::TokenIssue | AuthError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
