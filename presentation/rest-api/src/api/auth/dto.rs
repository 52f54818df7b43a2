use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::PublicUser;
use business::domain::user::use_cases::login::LoginResult;

/// Missing fields are accepted here and rejected by the use case, so every
/// validation failure shares the same error body.
#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Ids of the products this user marked as favorite, oldest first
    pub favorite_products: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PublicUser> for UserResponse {
    fn from(user: PublicUser) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            favorite_products: user
                .favorite_products
                .iter()
                .map(|id| id.to_string())
                .collect(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    /// Bearer token for the `Authorization` header
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            message: "Login successful".to_string(),
            token: result.token.token,
            expires_at: result.token.expires_at,
            user: result.user.into(),
        }
    }
}
