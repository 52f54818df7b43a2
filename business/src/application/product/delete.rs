use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::image_files::discard_images;
use crate::domain::errors::RepositoryError;
use crate::domain::image::services::ImageStore;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let not_found = |e: RepositoryError| match e {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        };

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(not_found)?;

        discard_images(
            self.image_store.as_ref(),
            &product.images,
            self.logger.as_ref(),
        )
        .await;

        self.repository
            .delete(params.id)
            .await
            .map_err(not_found)?;

        self.logger
            .info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::errors::ImageError;
    use crate::domain::image::model::{ImageFilename, StoredImage, UploadedImage};
    use crate::domain::product::model::Product;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;
    use std::sync::Mutex;
    use uuid::Uuid;

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
        pub Store {}

        #[async_trait]
        impl ImageStore for Store {
            async fn save(&self, image: &UploadedImage) -> Result<ImageFilename, ImageError>;
            async fn load(&self, filename: &ImageFilename) -> Result<StoredImage, ImageError>;
            async fn delete(&self, filename: &ImageFilename) -> Result<(), ImageError>;
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

    fn make_product(id: Uuid, name: &str, sku: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            name.to_string(),
            sku.to_string(),
            4,
            "Hand-thrown stoneware".to_string(),
            22.0,
            vec!["a.jpg".to_string(), "b.jpg".to_string()],
            "a.jpg".to_string(),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_delete_product_and_its_images() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(product_id, "Ceramic Mug", "MUG-001")));
        mock_repo
            .expect_delete()
            .with(eq(product_id))
            .times(1)
            .returning(|_| Ok(()));

        let deleted = Arc::new(Mutex::new(Vec::new()));
        let deleted_clone = deleted.clone();
        let mut store = MockStore::new();
        store.expect_delete().times(2).returning(move |filename| {
            deleted_clone
                .lock()
                .unwrap()
                .push(filename.as_str().to_string());
            Ok(())
        });

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: product_id }).await;

        assert!(result.is_ok());
        let mut deleted = deleted.lock().unwrap().clone();
        deleted.sort();
        assert_eq!(deleted, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[tokio::test]
    async fn should_delete_row_even_when_image_removal_fails() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(product_id, "Ceramic Mug", "MUG-001")));
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));

        let mut store = MockStore::new();
        store
            .expect_delete()
            .returning(|_| Err(ImageError::StorageFailed));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: product_id }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let mut store = MockStore::new();
        store.expect_delete().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
