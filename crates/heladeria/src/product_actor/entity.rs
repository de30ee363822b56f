//! Entity trait implementation for the Product domain type.
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ();
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Self::from_params(id, params))
    }

    /// Always fails: the catalog is not edited at runtime.
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Err(ProductError::ReadOnly(self.id.to_string()))
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
        }
    }
}
