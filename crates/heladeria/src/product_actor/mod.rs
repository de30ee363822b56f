//! # Product Actor
//!
//! Holds the storefront catalog behind a [`ResourceActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction::CheckStock`], the one custom action
//! - [`new()`] - creates the actor and its generic client
//!
//! Ids come from a sequential generator, so seeding the catalog in order reproduces the
//! catalog ids.
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::ActorClient;
//! use heladeria::clients::ProductClient;
//! use heladeria::{catalog, product_actor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     for params in catalog::seed() {
//!         client.create_product(params).await?;
//!     }
//!     assert_eq!(client.list().await?.len(), 13);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use actor_framework::{sequential_ids, ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size, sequential_ids())
}
