use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::image::errors::ImageError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ImageError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ImageError::InvalidFilename => (StatusCode::BAD_REQUEST, "ValidationError"),
            ImageError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ImageError::StorageFailed => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
