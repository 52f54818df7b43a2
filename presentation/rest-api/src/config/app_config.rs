use super::{
    auth_config::AuthConfig, cors_config, server_config::ServerConfig,
    storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env()?,
            storage: StorageConfig::from_env(),
        })
    }
}
