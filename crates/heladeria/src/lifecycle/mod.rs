//! # System Lifecycle
//!
//! Starting, seeding and stopping the storefront's actors.
//!
//! [`OrderSystem::start`] spawns one actor per resource and loads the catalog:
//!
//! ```rust
//! use heladeria::config::Config;
//! use heladeria::lifecycle::OrderSystem;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = OrderSystem::start(&Config::default()).await?;
//!     let stats = system.product_client.stats().await?;
//!     assert_eq!(stats.total_products, 13);
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - every actor task is joined
//!
//! Clones of the clients held elsewhere (the HTTP router state, for example) keep their
//! actor alive, so drop those before calling [`OrderSystem::shutdown`].
//!
//! Neither actor depends on the other, so both run with `Context = ()`.

pub mod order_system;

pub use order_system::*;
