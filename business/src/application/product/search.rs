use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError> {
        let query = params.query.unwrap_or_default();
        let term = query.trim();
        if term.is_empty() {
            return Err(ProductError::SearchQueryRequired);
        }

        self.logger.info(&format!("Searching products for: {}", term));
        let products = self.repository.search(term).await?;

        // An empty result is reported as a miss rather than an empty list
        if products.is_empty() {
            self.logger
                .debug(&format!("No products matched: {}", term));
            return Err(ProductError::NoMatches);
        }

        self.logger
            .info(&format!("Found {} matching products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;
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
    async fn should_return_matches_for_trimmed_query() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_search()
            .with(eq("mug"))
            .times(1)
            .returning(|_| Ok(vec![make_product(Uuid::new_v4(), "Ceramic Mug", "MUG-001")]));

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(SearchProductsParams {
                query: Some("  mug ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn should_reject_blank_query_without_touching_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_search().never();

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let blank = use_case
            .execute(SearchProductsParams {
                query: Some("   ".to_string()),
            })
            .await;
        let missing = use_case.execute(SearchProductsParams { query: None }).await;

        assert!(matches!(blank, Err(ProductError::SearchQueryRequired)));
        assert!(matches!(missing, Err(ProductError::SearchQueryRequired)));
    }

    #[tokio::test]
    async fn should_report_no_matches_when_result_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_search().returning(|_| Ok(vec![]));

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                query: Some("teapot".to_string()),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NoMatches)));
    }

    #[tokio::test]
    async fn should_surface_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_search()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                query: Some("mug".to_string()),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Repository(_))));
    }
}
