//! # Order Client
//!
//! Submission, lookup and the admin views over the order store.
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus, OrderSummary};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Validation and the simulated side effects run inside the actor, in the Order
/// entity's `from_create_params` and `on_create` hooks.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Validates and stores a submission, returning the stored order.
    #[instrument(skip(self, params), fields(items = params.items.len(), total = params.total))]
    pub async fn submit_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        info!("Sending create_order to actor");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order stored");
        self.find_order(id).await
    }

    /// Looks up one order, failing with [`OrderError::NotFound`] when absent.
    #[instrument(skip(self))]
    pub async fn find_order(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Looking up order");
        let missing = id.to_string();
        self.get(id).await?.ok_or(OrderError::NotFound(missing))
    }

    /// Stored orders accepted by `filter`, in submission order.
    #[instrument(skip(self))]
    pub async fn search_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|order| filter.accepts(order))
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<OrderSummary, OrderError> {
        Ok(OrderSummary::from_orders(&self.list().await?))
    }

    /// Records an admin's request to move an order to `status`.
    ///
    /// Returns the order as stored; its status does not change.
    #[instrument(skip(self))]
    pub async fn request_status_change(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::RequestStatusChange(status))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::RequestStatusChange(order) => Ok(order),
        }
    }
}
