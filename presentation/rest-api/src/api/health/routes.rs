use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,
    pub database: bool,
    pub timestamp: String,
    pub version: String,
}

pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Health check
    ///
    /// Public liveness probe that also pings the database.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let database = sqlx::query("SELECT 1").execute(&self.pool).await.is_ok();

        Json(HealthCheckResponse {
            status: if database { "healthy" } else { "degraded" }.to_string(),
            database,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
