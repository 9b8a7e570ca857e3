use async_trait::async_trait;
use contracts::domain::brand::Brand;
use contracts::domain::product::{Product, ProductDraft, ProductId, ProductPage};
use contracts::shared::filter::FilterPredicate;
use contracts::shared::pagination::PageRequest;

use super::error::TransportError;

/// Operations the catalog core consumes from the backend.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait CatalogTransport {
    async fn list_products(
        &self,
        filter: &FilterPredicate,
        page: &PageRequest,
    ) -> Result<ProductPage, TransportError>;

    async fn list_brands(&self) -> Result<Vec<Brand>, TransportError>;

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, TransportError>;

    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, TransportError>;

    async fn delete_product(&self, id: ProductId) -> Result<(), TransportError>;
}
