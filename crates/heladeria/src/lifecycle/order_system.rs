use crate::catalog;
use crate::clients::{OrderClient, ProductClient};
use crate::config::Config;
use crate::product_actor::ProductError;
use crate::{order_actor, product_actor};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Catalog seeding failed: {0}")]
    Seed(#[from] ProductError),
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The running storefront: the catalog actor, the order store actor and their clients.
pub struct OrderSystem {
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns both actors with an empty catalog.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(mailbox_size: usize) -> Self {
        let (product_actor, product_client) = product_actor::new(mailbox_size);
        let (order_actor, order_client) = order_actor::new(mailbox_size);

        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            product_client: ProductClient::new(product_client),
            order_client: OrderClient::new(order_client),
            handles: vec![product_handle, order_handle],
        }
    }

    /// Spawns the actors and loads the catalog.
    pub async fn start(config: &Config) -> Result<Self, LifecycleError> {
        let system = Self::new(config.mailbox_size);
        system.seed_catalog().await?;
        Ok(system)
    }

    /// Creates every catalog product, checking each lands on its catalog id.
    pub async fn seed_catalog(&self) -> Result<(), LifecycleError> {
        let seed = catalog::seed();
        let count = seed.len();
        for (expected, params) in (1u32..).zip(seed) {
            let id = self.product_client.create_product(params).await?;
            if id.0 != expected {
                return Err(ProductError::SeedOutOfOrder {
                    expected,
                    actual: id.0,
                }
                .into());
            }
        }
        info!(count, "Catalog seeded");
        Ok(())
    }

    /// Drops the clients and waits for every actor to stop.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");
        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
