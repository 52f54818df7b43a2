use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::model::User;
use business::domain::user::use_cases::authenticate::{AuthenticateParams, AuthenticateUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Resolves the caller of a protected endpoint from its `Authorization` header.
///
/// A missing header yields 403, a malformed, expired or orphaned token 401.
pub async fn require_user(
    use_case: &dyn AuthenticateUseCase,
    authorization: Option<String>,
) -> Result<User, (StatusCode, Json<ErrorResponse>)> {
    use_case
        .execute(AuthenticateParams { authorization })
        .await
        .map_err(|e| e.into_error_response())
}
