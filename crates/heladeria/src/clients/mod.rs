//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client turns framework errors into its actor's error type, recovering the
//! entity's own error when the actor rejected a request.

pub mod order_client;
pub mod product_client;

pub use order_client::*;
pub use product_client::*;
