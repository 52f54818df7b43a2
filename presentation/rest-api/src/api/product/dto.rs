use chrono::{DateTime, Utc};
use poem_openapi::{Multipart, Object, types::multipart::Upload};
use uuid::Uuid;

use business::domain::image::model::UploadedImage;
use business::domain::product::model::{Product, ProductChanges, ProductFields};

use crate::api::error::ErrorResponse;

/// Multipart form for `POST /api/products/add`.
#[derive(Multipart)]
pub struct CreateProductPayload {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// Position of the featured image within `images`
    #[oai(rename = "thumbnailIndex")]
    pub thumbnail_index: Option<i64>,
    pub images: Vec<Upload>,
}

impl CreateProductPayload {
    /// Splits the form into scalar fields and uploads. Fails when a scalar
    /// field is absent.
    pub fn into_parts(self) -> Result<(ProductFields, Option<i64>, Vec<Upload>), ErrorResponse> {
        match (self.name, self.sku, self.quantity, self.description, self.price) {
            (Some(name), Some(sku), Some(quantity), Some(description), Some(price)) => Ok((
                ProductFields {
                    name,
                    sku,
                    quantity,
                    description,
                    price,
                },
                self.thumbnail_index,
                self.images,
            )),
            _ => Err(ErrorResponse::new(
                "ValidationError",
                "product.missing_fields",
            )),
        }
    }
}

/// Multipart form for `PUT /api/products/edit/:id`. Every field is optional.
#[derive(Multipart)]
pub struct UpdateProductPayload {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[oai(rename = "thumbnailIndex")]
    pub thumbnail_index: Option<i64>,
    pub images: Vec<Upload>,
    /// Stored filenames to keep next to the new uploads
    #[oai(rename = "existingImages")]
    pub existing_images: Vec<String>,
}

impl UpdateProductPayload {
    pub fn changes(&self) -> ProductChanges {
        ProductChanges {
            name: self.name.clone(),
            sku: self.sku.clone(),
            quantity: self.quantity,
            description: self.description.clone(),
            price: self.price,
        }
    }
}

/// Drains every upload into memory.
pub async fn read_uploads(uploads: Vec<Upload>) -> Result<Vec<UploadedImage>, ErrorResponse> {
    let mut images = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let original_name = upload.file_name().map(str::to_string);
        let data = upload.into_vec().await.map_err(|e| {
            tracing::warn!("Failed to read uploaded file: {}", e);
            ErrorResponse::new("ValidationError", "image.unreadable_upload")
        })?;
        images.push(UploadedImage {
            original_name,
            data,
        });
    }
    Ok(images)
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub description: String,
    pub price: f64,
    /// Stored filenames, served by `GET /api/products/image/:filename`
    pub images: Vec<String>,
    /// Featured image, always one of `images`
    pub thumbnail: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            sku: product.sku,
            quantity: product.quantity,
            description: product.description,
            price: product.price,
            images: product.images,
            thumbnail: product.thumbnail,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductCreatedResponse {
    pub message: String,
    pub product: ProductResponse,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductUpdatedResponse {
    pub message: String,
    pub updated_product: ProductResponse,
}

#[derive(Debug, Clone, Object)]
pub struct ProductSearchResponse {
    pub message: String,
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct FavoriteProductsResponse {
    pub message: String,
    pub favorite_products: Vec<String>,
}

impl FavoriteProductsResponse {
    pub fn new(message: &str, ids: Vec<Uuid>) -> Self {
        Self {
            message: message.to_string(),
            favorite_products: ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}
