//! # Product Client
//!
//! Catalog queries on top of a `ResourceClient<Product>`.
use crate::model::{CatalogStats, Category, Product, ProductCreate, ProductId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Looks up one product, failing with [`ProductError::NotFound`] when absent.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// The catalog, optionally narrowed to one category, in catalog order.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        Ok(match category {
            Some(category) => products
                .into_iter()
                .filter(|p| p.category == category)
                .collect(),
            None => products,
        })
    }

    /// Current stock level of a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
        }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<CatalogStats, ProductError> {
        Ok(CatalogStats::from_products(&self.list().await?))
    }
}
