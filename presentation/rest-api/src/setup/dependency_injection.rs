use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use security::jwt_token_service::JwtTokenService;
use security::password_hasher::Argon2PasswordHasher;
use storage::local_image_store::LocalImageStore;

use business::application::image::get::GetImageUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_favorites::GetFavoriteProductsUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::toggle_favorite::ToggleFavoriteUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::user::authenticate::AuthenticateUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::register::RegisterUseCaseImpl;

use crate::config::auth_config::AuthConfig;
use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub async fn new(
        pool: sqlx::PgPool,
        auth: &AuthConfig,
        storage: &StorageConfig,
    ) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let password_hasher = Arc::new(Argon2PasswordHasher);
        let token_service = Arc::new(JwtTokenService::new(&auth.jwt_secret, auth.token_ttl));

        let image_store = Arc::new(LocalImageStore::new(storage.upload_dir.clone()));
        image_store.ensure_root().await?;

        // Account use cases
        let register_use_case = Arc::new(RegisterUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher: password_hasher.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher,
            token_service: token_service.clone(),
            logger: logger.clone(),
        });
        let authenticate_use_case = Arc::new(AuthenticateUseCaseImpl {
            repository: user_repository.clone(),
            token_service,
            logger: logger.clone(),
        });

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let toggle_favorite_use_case = Arc::new(ToggleFavoriteUseCaseImpl {
            product_repository: product_repository.clone(),
            user_repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let get_favorites_use_case = Arc::new(GetFavoriteProductsUseCaseImpl {
            product_repository,
            user_repository,
            logger: logger.clone(),
        });
        let get_image_use_case = Arc::new(GetImageUseCaseImpl {
            image_store,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(
            register_use_case,
            login_use_case,
            authenticate_use_case.clone(),
        );

        let product_api = crate::api::product::routes::ProductApi::new(
            authenticate_use_case,
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
            update_use_case,
            delete_use_case,
            toggle_favorite_use_case,
            get_favorites_use_case,
            get_image_use_case,
        );

        Ok(Self {
            health_api,
            auth_api,
            product_api,
        })
    }
}
