use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::{ProductEntity, price_to_decimal};

const PRODUCT_COLUMNS: &str =
    "id, name, sku, quantity, description, price, images, thumbnail, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Product query failed: {}", e);
    RepositoryError::DatabaseError
}

fn write_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => RepositoryError::Duplicated,
        other => database_error(other),
    }
}

/// Builds an ILIKE pattern that matches `term` literally anywhere in the value.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products ORDER BY created_at DESC",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn search(&self, term: &str) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            r"SELECT {} FROM products
            WHERE name ILIKE $1 ESCAPE '\' OR sku ILIKE $1 ESCAPE '\'
            ORDER BY created_at DESC",
            PRODUCT_COLUMNS
        ))
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_existing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, RepositoryError> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM products WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, sku, quantity, description, price, images, thumbnail, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.sku)
        .bind(product.quantity)
        .bind(&product.description)
        .bind(price_to_decimal(product.price)?)
        .bind(&product.images)
        .bind(&product.thumbnail)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE products SET
                name = $2,
                sku = $3,
                quantity = $4,
                description = $5,
                price = $6,
                images = $7,
                thumbnail = $8,
                updated_at = $9
            WHERE id = $1"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.sku)
        .bind(product.quantity)
        .bind(&product.description)
        .bind(price_to_decimal(product.price)?)
        .bind(&product.images)
        .bind(&product.thumbnail)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_term_in_wildcards() {
        assert_eq!(contains_pattern("mug"), "%mug%");
    }

    #[test]
    fn should_escape_like_metacharacters() {
        assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }
}
