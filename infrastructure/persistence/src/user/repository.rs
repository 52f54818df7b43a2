use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;

const USER_COLUMNS: &str =
    "id, name, email, password_hash, favorite_products, created_at, updated_at";

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("User query failed: {}", e);
    RepositoryError::DatabaseError
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO users (id, name, email, password_hash, favorite_products, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.favorite_products)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepositoryError::Duplicated
            }
            other => database_error(other),
        })?;

        Ok(())
    }

    async fn update_favorites(
        &self,
        id: UserId,
        favorite_products: &[Uuid],
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE users SET favorite_products = $2, updated_at = $3 WHERE id = $1",
        )
        .bind(id.as_uuid())
        .bind(favorite_products)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
