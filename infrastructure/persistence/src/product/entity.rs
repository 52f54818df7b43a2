use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub description: String,
    pub price: BigDecimal,
    pub images: Vec<String>,
    pub thumbnail: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.sku,
            self.quantity,
            self.description,
            self.price.to_f64().unwrap_or_default(),
            self.images,
            self.thumbnail,
            self.created_at,
            self.updated_at,
        )
    }
}

/// Converts a domain price into the NUMERIC column value.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price)
        .map(|decimal| decimal.with_scale_round(2, bigdecimal::RoundingMode::HalfEven))
        .ok_or(RepositoryError::DatabaseError)
}
