use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        if let ProductError::Image(inner) = self {
            return inner.into_error_response();
        }

        let (status, name) = match &self {
            ProductError::NameEmpty
            | ProductError::SkuEmpty
            | ProductError::DescriptionEmpty
            | ProductError::NegativeQuantity
            | ProductError::InvalidPrice
            | ProductError::InvalidThumbnailIndex
            | ProductError::SearchQueryRequired => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::SkuAlreadyExists => (StatusCode::BAD_REQUEST, "Conflict"),
            ProductError::NotFound | ProductError::NoMatches | ProductError::UserNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            ProductError::UpdateFailed | ProductError::Repository(_) | ProductError::Image(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::image::errors::ImageError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = ProductError::InvalidThumbnailIndex.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
    }

    #[test]
    fn should_map_empty_search_to_not_found() {
        let (status, json) = ProductError::NoMatches.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "product.no_matches");
    }

    #[test]
    fn should_map_lost_update_to_internal_error() {
        let (status, _) = ProductError::UpdateFailed.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_delegate_image_errors() {
        let (status, json) =
            ProductError::Image(ImageError::StorageFailed).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "image.storage_failed");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
