//! Entity trait implementation for the Order domain type.
//!
//! Submission rules live here: [`from_create_params`](ActorEntity::from_create_params)
//! rejects incomplete submissions before an order exists, and
//! [`on_create`](ActorEntity::on_create) runs the post-submission side effects.
//!
//! Both side effects are simulated. They write a log record and touch no state, so the
//! catalog stock never changes and no one is notified.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let missing = params.customer_info.missing_contact_fields();
        if !missing.is_empty() {
            return Err(OrderError::Validation(format!(
                "Incomplete customer information: missing {}",
                missing.join(", ")
            )));
        }
        if params.items.is_empty() {
            return Err(OrderError::Validation("Order has no items".to_string()));
        }
        Ok(Self::new(id, params, Utc::now()))
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        for item in &self.items {
            info!(
                order_id = %self.id,
                product_id = %item.product.id,
                quantity = item.quantity,
                "Stock reduction is simulated, inventory unchanged"
            );
        }
        info!(order_id = %self.id, total = self.total, "New order notification (simulated)");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Err(OrderError::Immutable(self.id.to_string()))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::RequestStatusChange(requested) => {
                info!(
                    order_id = %self.id,
                    current = %self.status,
                    %requested,
                    "Status change requested, order left unchanged"
                );
                Ok(OrderActionResult::RequestStatusChange(self.clone()))
            }
        }
    }
}
