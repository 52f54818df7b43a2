use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

/// Exclusive upper bound of a storable price (NUMERIC(12,2)).
pub const MAX_PRICE: f64 = 1e10;

/// Rounds a price to whole cents, the precision prices are stored with.
pub fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    pub thumbnail: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Scalar catalog fields shared by creation and edits.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub description: String,
    pub price: f64,
}

/// Partial edit: every `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl ProductFields {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if self.sku.trim().is_empty() {
            return Err(ProductError::SkuEmpty);
        }
        if self.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }
        if self.quantity < 0 {
            return Err(ProductError::NegativeQuantity);
        }
        // Checked at storage precision: a sub-cent price would be stored as zero
        let cents = round_to_cents(self.price);
        if !cents.is_finite() || cents <= 0.0 || cents >= MAX_PRICE {
            return Err(ProductError::InvalidPrice);
        }
        Ok(())
    }
}

impl Product {
    /// Builds a new product. `thumbnail` must be one of `images`.
    pub fn new(
        fields: ProductFields,
        images: Vec<String>,
        thumbnail: String,
    ) -> Result<Self, ProductError> {
        fields.validate()?;

        if !images.contains(&thumbnail) {
            return Err(ProductError::InvalidThumbnailIndex);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: fields.name,
            sku: fields.sku,
            quantity: fields.quantity,
            description: fields.description,
            price: round_to_cents(fields.price),
            images,
            thumbnail,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        sku: String,
        quantity: i64,
        description: String,
        price: f64,
        images: Vec<String>,
        thumbnail: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            sku,
            quantity,
            description,
            price,
            images,
            thumbnail,
            created_at,
            updated_at,
        }
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            sku: self.sku.clone(),
            quantity: self.quantity,
            description: self.description.clone(),
            price: self.price,
        }
    }

    /// Merges a partial edit over the current fields and validates the result.
    pub fn merge_changes(&self, changes: ProductChanges) -> Result<ProductFields, ProductError> {
        let current = self.fields();
        let merged = ProductFields {
            name: changes.name.unwrap_or(current.name),
            sku: changes.sku.unwrap_or(current.sku),
            quantity: changes.quantity.unwrap_or(current.quantity),
            description: changes.description.unwrap_or(current.description),
            price: changes.price.unwrap_or(current.price),
        };
        merged.validate()?;
        Ok(ProductFields {
            price: round_to_cents(merged.price),
            ..merged
        })
    }
}
