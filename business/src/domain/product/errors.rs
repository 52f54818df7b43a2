#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.sku_empty")]
    SkuEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.negative_quantity")]
    NegativeQuantity,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_thumbnail_index")]
    InvalidThumbnailIndex,
    #[error("product.sku_already_exists")]
    SkuAlreadyExists,
    #[error("product.not_found")]
    NotFound,
    #[error("product.search_query_required")]
    SearchQueryRequired,
    #[error("product.no_matches")]
    NoMatches,
    #[error("user.not_found")]
    UserNotFound,
    /// The record vanished between read and write.
    #[error("product.update_failed")]
    UpdateFailed,
    #[error(transparent)]
    Image(#[from] crate::domain::image::errors::ImageError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
