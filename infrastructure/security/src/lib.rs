pub mod jwt_token_service;
pub mod password_hasher;
