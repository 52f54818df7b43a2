use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path, Query},
    payload::{Binary, Json},
};
use uuid::Uuid;

use business::domain::image::use_cases::get::{GetImageParams, GetImageUseCase};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_favorites::{
    GetFavoriteProductsParams, GetFavoriteProductsUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::use_cases::toggle_favorite::{
    ToggleFavoriteParams, ToggleFavoriteUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::user::use_cases::authenticate::AuthenticateUseCase;

use crate::api::auth::gate::require_user;
use crate::api::error::{ErrorResponse, IntoErrorResponse, MessageResponse};
use crate::api::product::dto::{
    CreateProductPayload, FavoriteProductsResponse, ProductCreatedResponse, ProductResponse,
    ProductSearchResponse, ProductUpdatedResponse, UpdateProductPayload, read_uploads,
};
use crate::api::tags::ApiTags;

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", "product.invalid_id"))
}

pub struct ProductApi {
    authenticate_use_case: Arc<dyn AuthenticateUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    toggle_favorite_use_case: Arc<dyn ToggleFavoriteUseCase>,
    get_favorites_use_case: Arc<dyn GetFavoriteProductsUseCase>,
    get_image_use_case: Arc<dyn GetImageUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        authenticate_use_case: Arc<dyn AuthenticateUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        toggle_favorite_use_case: Arc<dyn ToggleFavoriteUseCase>,
        get_favorites_use_case: Arc<dyn GetFavoriteProductsUseCase>,
        get_image_use_case: Arc<dyn GetImageUseCase>,
    ) -> Self {
        Self {
            authenticate_use_case,
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
            update_use_case,
            delete_use_case,
            toggle_favorite_use_case,
            get_favorites_use_case,
            get_image_use_case,
        }
    }
}

/// Product catalog API
///
/// Reads are public. Creating, editing, deleting and favorites need a bearer token.
#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// Stores the uploaded images and creates the product. `thumbnailIndex`
    /// selects the featured image among the uploads.
    #[oai(path = "/api/products/add", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        payload: CreateProductPayload,
    ) -> CreateProductResponse {
        if let Err((status, json)) =
            require_user(self.authenticate_use_case.as_ref(), authorization.0).await
        {
            return match status.as_u16() {
                401 => CreateProductResponse::Unauthorized(json),
                403 => CreateProductResponse::Forbidden(json),
                _ => CreateProductResponse::InternalError(json),
            };
        }

        let (fields, thumbnail_index, uploads) = match payload.into_parts() {
            Ok(parts) => parts,
            Err(error) => return CreateProductResponse::BadRequest(Json(error)),
        };
        let images = match read_uploads(uploads).await {
            Ok(images) => images,
            Err(error) => return CreateProductResponse::BadRequest(Json(error)),
        };

        let params = CreateProductParams {
            fields,
            images,
            thumbnail_index,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(ProductCreatedResponse {
                message: "Product added successfully".to_string(),
                product: product.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Newest first.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Favorite products of the caller
    #[oai(
        path = "/api/products/favorites",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_favorite_products(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
    ) -> GetFavoritesResponse {
        let user = match require_user(self.authenticate_use_case.as_ref(), authorization.0).await
        {
            Ok(user) => user,
            Err((status, json)) => {
                return match status.as_u16() {
                    401 => GetFavoritesResponse::Unauthorized(json),
                    403 => GetFavoritesResponse::Forbidden(json),
                    _ => GetFavoritesResponse::InternalError(json),
                };
            }
        };

        match self
            .get_favorites_use_case
            .execute(GetFavoriteProductsParams { user_id: user.id })
            .await
        {
            Ok(ids) => GetFavoritesResponse::Ok(Json(FavoriteProductsResponse::new(
                "Favorite products fetched successfully",
                ids,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetFavoritesResponse::NotFound(json),
                    _ => GetFavoritesResponse::InternalError(json),
                }
            }
        }
    }

    /// Search products
    ///
    /// Case-insensitive substring match on name or SKU.
    #[oai(path = "/api/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(&self, query: Query<Option<String>>) -> SearchProductsResponse {
        match self
            .search_use_case
            .execute(SearchProductsParams { query: query.0 })
            .await
        {
            Ok(products) => SearchProductsResponse::Ok(Json(ProductSearchResponse {
                message: "Products fetched successfully".to_string(),
                products: products.into_iter().map(|p| p.into()).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchProductsResponse::BadRequest(json),
                    404 => SearchProductsResponse::NotFound(json),
                    _ => SearchProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(invalid_id());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Edit a product
    ///
    /// Absent fields keep their values. Stored images survive only when named
    /// in `existingImages` or when the edit sends no images at all; the others
    /// are deleted once the product is saved.
    #[oai(
        path = "/api/products/edit/:id",
        method = "put",
        tag = "ApiTags::Products"
    )]
    async fn update_product(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        id: Path<String>,
        payload: UpdateProductPayload,
    ) -> UpdateProductResponse {
        if let Err((status, json)) =
            require_user(self.authenticate_use_case.as_ref(), authorization.0).await
        {
            return match status.as_u16() {
                401 => UpdateProductResponse::Unauthorized(json),
                403 => UpdateProductResponse::Forbidden(json),
                _ => UpdateProductResponse::InternalError(json),
            };
        }

        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateProductResponse::BadRequest(invalid_id());
        };

        let changes = payload.changes();
        let images = match read_uploads(payload.images).await {
            Ok(images) => images,
            Err(error) => return UpdateProductResponse::BadRequest(Json(error)),
        };

        let params = UpdateProductParams {
            id: uuid,
            changes,
            images,
            retained_images: payload.existing_images,
            thumbnail_index: payload.thumbnail_index,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(ProductUpdatedResponse {
                message: "Product updated successfully".to_string(),
                updated_product: product.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Removes the product and its image files.
    #[oai(
        path = "/api/products/delete/:id",
        method = "delete",
        tag = "ApiTags::Products"
    )]
    async fn delete_product(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        id: Path<String>,
    ) -> DeleteProductResponse {
        if let Err((status, json)) =
            require_user(self.authenticate_use_case.as_ref(), authorization.0).await
        {
            return match status.as_u16() {
                401 => DeleteProductResponse::Unauthorized(json),
                403 => DeleteProductResponse::Forbidden(json),
                _ => DeleteProductResponse::InternalError(json),
            };
        }

        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(invalid_id());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok(Json(MessageResponse {
                message: "Product deleted successfully".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Toggle a favorite
    ///
    /// Adds the product to the caller's favorites, or removes it when already there.
    #[oai(
        path = "/api/products/favorite/:id",
        method = "patch",
        tag = "ApiTags::Products"
    )]
    async fn toggle_favorite(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        id: Path<String>,
    ) -> ToggleFavoriteResponse {
        let user = match require_user(self.authenticate_use_case.as_ref(), authorization.0).await
        {
            Ok(user) => user,
            Err((status, json)) => {
                return match status.as_u16() {
                    401 => ToggleFavoriteResponse::Unauthorized(json),
                    403 => ToggleFavoriteResponse::Forbidden(json),
                    _ => ToggleFavoriteResponse::InternalError(json),
                };
            }
        };

        let Ok(product_id) = Uuid::parse_str(&id.0) else {
            return ToggleFavoriteResponse::BadRequest(invalid_id());
        };

        match self
            .toggle_favorite_use_case
            .execute(ToggleFavoriteParams {
                product_id,
                user_id: user.id,
            })
            .await
        {
            Ok(ids) => ToggleFavoriteResponse::Ok(Json(FavoriteProductsResponse::new(
                "Product favorite status updated",
                ids,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ToggleFavoriteResponse::NotFound(json),
                    _ => ToggleFavoriteResponse::InternalError(json),
                }
            }
        }
    }

    /// Download a product image
    #[oai(
        path = "/api/products/image/:filename",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_image(&self, filename: Path<String>) -> GetImageResponse {
        match self
            .get_image_use_case
            .execute(GetImageParams {
                filename: filename.0,
            })
            .await
        {
            Ok(image) => GetImageResponse::Ok(Binary(image.data), image.content_type),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetImageResponse::BadRequest(json),
                    404 => GetImageResponse::NotFound(json),
                    _ => GetImageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductCreatedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFavoritesResponse {
    #[oai(status = 200)]
    Ok(Json<FavoriteProductsResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductSearchResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductUpdatedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleFavoriteResponse {
    #[oai(status = 200)]
    Ok(Json<FavoriteProductsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetImageResponse {
    #[oai(status = 200)]
    Ok(Binary<Vec<u8>>, #[oai(header = "Content-Type")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
