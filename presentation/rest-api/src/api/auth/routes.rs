use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, payload::Json};

use business::domain::user::use_cases::authenticate::AuthenticateUseCase;
use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::register::{RegisterParams, RegisterUseCase};

use crate::api::auth::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::api::auth::gate::require_user;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    authenticate_use_case: Arc<dyn AuthenticateUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        authenticate_use_case: Arc<dyn AuthenticateUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            authenticate_use_case,
        }
    }
}

/// Account API
#[OpenApi]
impl AuthApi {
    /// Register a new account
    ///
    /// Requires a name, a valid email and a password longer than 6 characters.
    #[oai(path = "/api/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterParams {
            name: body.0.name.unwrap_or_default(),
            email: body.0.email.unwrap_or_default(),
            password: body.0.password.unwrap_or_default(),
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => RegisterResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in
    ///
    /// Exchanges email and password for a bearer token.
    #[oai(path = "/api/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginApiResponse {
        let params = LoginParams {
            email: body.0.email.unwrap_or_default(),
            password: body.0.password.unwrap_or_default(),
        };

        match self.login_use_case.execute(params).await {
            Ok(result) => LoginApiResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LoginApiResponse::BadRequest(json),
                    _ => LoginApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Current account
    #[oai(path = "/api/auth/me", method = "get", tag = "ApiTags::Auth")]
    async fn me(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
    ) -> MeResponse {
        match require_user(self.authenticate_use_case.as_ref(), authorization.0).await {
            Ok(user) => MeResponse::Ok(Json(user.to_public().into())),
            Err((status, json)) => match status.as_u16() {
                401 => MeResponse::Unauthorized(json),
                403 => MeResponse::Forbidden(json),
                _ => MeResponse::InternalError(json),
            },
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginApiResponse {
    #[oai(status = 200)]
    Ok(Json<LoginResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MeResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
