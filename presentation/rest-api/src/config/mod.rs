pub mod app_config;
pub mod auth_config;
pub mod cors_config;
pub mod database_config;
pub mod server_config;
pub mod storage_config;
