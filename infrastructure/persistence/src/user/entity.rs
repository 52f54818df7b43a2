use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub favorite_products: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(
            UserId::from(self.id),
            self.name,
            self.email,
            self.password_hash,
            self.favorite_products,
            self.created_at,
            self.updated_at,
        )
    }
}
