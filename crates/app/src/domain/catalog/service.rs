//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use posy::catalog::{Bouquet, Catalog, Category, Flower, Product};

use crate::domain::catalog::errors::CatalogServiceError;

/// Catalog service backed by the built-in florist catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalogService {
    catalog: Catalog,
}

impl StaticCatalogService {
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogService for StaticCatalogService {
    async fn list_flowers(
        &self,
        category: Option<Category>,
        in_stock_only: bool,
    ) -> Result<Vec<Flower>, CatalogServiceError> {
        Ok(self
            .catalog
            .flowers_in(category)
            .filter(|flower| !in_stock_only || flower.in_stock)
            .copied()
            .collect())
    }

    async fn list_bouquets(&self, popular_only: bool) -> Result<Vec<Bouquet>, CatalogServiceError> {
        Ok(self
            .catalog
            .bouquets()
            .iter()
            .filter(|bouquet| !popular_only || bouquet.popular)
            .copied()
            .collect())
    }

    async fn get_flower(&self, id: String) -> Result<Flower, CatalogServiceError> {
        self.catalog
            .flower(&id)
            .copied()
            .ok_or(CatalogServiceError::FlowerNotFound(id))
    }

    async fn resolve(&self, id: String) -> Result<Product, CatalogServiceError> {
        Ok(self.catalog.resolve(&id)?)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Lists flowers, optionally limited to a category and to flowers in stock.
    async fn list_flowers(
        &self,
        category: Option<Category>,
        in_stock_only: bool,
    ) -> Result<Vec<Flower>, CatalogServiceError>;

    /// Lists bouquets, optionally only the popular ones.
    async fn list_bouquets(&self, popular_only: bool) -> Result<Vec<Bouquet>, CatalogServiceError>;

    /// Retrieves a single flower.
    async fn get_flower(&self, id: String) -> Result<Flower, CatalogServiceError>;

    /// Resolves a product id to its name, description and unit price.
    async fn resolve(&self, id: String) -> Result<Product, CatalogServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn list_flowers_filters_by_category() -> TestResult {
        let service = StaticCatalogService::default();

        let roses = service.list_flowers(Some(Category::Roses), false).await?;

        assert_eq!(roses.len(), 3);
        assert!(roses.iter().all(|flower| flower.category == Category::Roses));

        Ok(())
    }

    #[tokio::test]
    async fn list_bouquets_can_return_only_popular() -> TestResult {
        let service = StaticCatalogService::default();

        let all = service.list_bouquets(false).await?;
        let popular = service.list_bouquets(true).await?;

        assert_eq!(all.len(), 6);
        assert!(!popular.is_empty());
        assert!(popular.len() < all.len());
        assert!(popular.iter().all(|bouquet| bouquet.popular));

        Ok(())
    }

    #[tokio::test]
    async fn resolve_finds_flowers_and_bouquets() -> TestResult {
        let service = StaticCatalogService::default();

        let rose = service.resolve("rose-red".to_string()).await?;
        let bouquet = service.resolve("romantic-red".to_string()).await?;

        assert_eq!(rose.unit_price, 4_99);
        assert_eq!(bouquet.unit_price, 79_99);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let service = StaticCatalogService::default();

        let product = service.resolve("orchid".to_string()).await;
        let flower = service.get_flower("romantic-red".to_string()).await;

        assert_eq!(
            product,
            Err(CatalogServiceError::ProductNotFound("orchid".to_string()))
        );
        assert_eq!(
            flower,
            Err(CatalogServiceError::FlowerNotFound("romantic-red".to_string()))
        );
    }
}
