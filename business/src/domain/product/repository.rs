use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Case-insensitive substring match over name or SKU. The term is matched literally.
    async fn search(&self, term: &str) -> Result<Vec<Product>, RepositoryError>;
    /// Returns the subset of `ids` that still resolve to a product, in no particular order.
    async fn get_existing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, RepositoryError>;
    /// Inserts a new product. Fails with `Duplicated` when the SKU is taken.
    async fn create(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Overwrites an existing product. Fails with `NotFound` when no row matched.
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
