//! # Order Actor
//!
//! The order store. A single [`ResourceActor`] owns every submitted order, so
//! submissions are appended one at a time and lookups never see a half-written order.
//! Orders live as long as the process.
//!
//! - [`entity`] - validation and the simulated post-submission side effects
//! - [`id`] - `ORD-<millis>-<suffix>` id generation
//! - [`actions`] - the logged-only status change request
//! - [`error`] - [`OrderError`]

pub mod actions;
pub mod entity;
pub mod error;
pub mod id;

pub use actions::*;
pub use error::*;
pub use id::order_ids;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size, order_ids())
}
