use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_favorites::{
    GetFavoriteProductsParams, GetFavoriteProductsUseCase,
};
use crate::domain::user::repository::UserRepository;

pub struct GetFavoriteProductsUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFavoriteProductsUseCase for GetFavoriteProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetFavoriteProductsParams,
    ) -> Result<Vec<Uuid>, ProductError> {
        let user = self
            .user_repository
            .get_by_id(params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::UserNotFound,
                other => ProductError::Repository(other),
            })?;

        if user.favorite_products.is_empty() {
            return Ok(Vec::new());
        }

        // Favorites may still name products deleted since they were added
        let existing = self
            .product_repository
            .get_existing_ids(&user.favorite_products)
            .await?;

        let favorites: Vec<Uuid> = user
            .favorite_products
            .into_iter()
            .filter(|id| existing.contains(id))
            .collect();

        self.logger.debug(&format!(
            "User {} has {} favorite products",
            user.id,
            favorites.len()
        ));
        Ok(favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::User;
    use crate::domain::user::value_objects::Email;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn search(&self, term: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn get_existing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, RepositoryError>;
            async fn create(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
            async fn create(&self, user: &User) -> Result<(), RepositoryError>;
            async fn update_favorites(
                &self,
                id: UserId,
                favorite_products: &[Uuid],
            ) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn make_user(favorites: Vec<Uuid>) -> User {
        let mut user = User::new(
            "Ann".to_string(),
            Email::parse("ann@x.com").unwrap(),
            "$argon2id$hash".to_string(),
        );
        user.favorite_products = favorites;
        user
    }

    #[tokio::test]
    async fn should_return_favorites_in_stored_order() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let user = make_user(vec![first, second]);
        let user_id = user.id;

        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_get_by_id()
            .returning(move |_| Ok(user.clone()));

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_existing_ids()
            .returning(move |_| Ok(vec![second, first]));

        let use_case = GetFavoriteProductsUseCaseImpl {
            product_repository: Arc::new(product_repo),
            user_repository: Arc::new(user_repo),
            logger: mock_logger(),
        };

        let favorites = use_case
            .execute(GetFavoriteProductsParams { user_id })
            .await
            .unwrap();

        assert_eq!(favorites, vec![first, second]);
    }

    #[tokio::test]
    async fn should_skip_favorites_of_deleted_products() {
        let kept = Uuid::new_v4();
        let deleted = Uuid::new_v4();
        let user = make_user(vec![deleted, kept]);
        let user_id = user.id;

        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_get_by_id()
            .returning(move |_| Ok(user.clone()));

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_existing_ids()
            .returning(move |_| Ok(vec![kept]));

        let use_case = GetFavoriteProductsUseCaseImpl {
            product_repository: Arc::new(product_repo),
            user_repository: Arc::new(user_repo),
            logger: mock_logger(),
        };

        let favorites = use_case
            .execute(GetFavoriteProductsParams { user_id })
            .await
            .unwrap();

        assert_eq!(favorites, vec![kept]);
    }

    #[tokio::test]
    async fn should_return_empty_list_without_querying_products() {
        let user = make_user(vec![]);
        let user_id = user.id;

        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_get_by_id()
            .returning(move |_| Ok(user.clone()));

        let mut product_repo = MockProductRepo::new();
        product_repo.expect_get_existing_ids().never();

        let use_case = GetFavoriteProductsUseCaseImpl {
            product_repository: Arc::new(product_repo),
            user_repository: Arc::new(user_repo),
            logger: mock_logger(),
        };

        let favorites = use_case
            .execute(GetFavoriteProductsParams { user_id })
            .await
            .unwrap();

        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn should_return_user_not_found_for_missing_account() {
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetFavoriteProductsUseCaseImpl {
            product_repository: Arc::new(MockProductRepo::new()),
            user_repository: Arc::new(user_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetFavoriteProductsParams {
                user_id: UserId::generate(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::UserNotFound)));
    }
}
