//! # Heladería
//!
//! Storefront core for an ice-cream shop, built on the generic actor framework.
//!
//! - **[model]**: catalog, cart and order data types.
//! - **[catalog]**: the seeded product list.
//! - **[cart]**: the cart reducer, its persistence and checkout preparation.
//! - **[product_actor]** / **[order_actor]**: the two resources, each owned by a
//!   [`ResourceActor`](actor_framework::ResourceActor).
//! - **[clients]**: typed wrappers over the actors' clients.
//! - **[lifecycle]**: starting, seeding and stopping the actors.
//! - **[api]**: the axum router.
//! - **[config]**: `HELADERIA_*` environment configuration.
//!
//! See [`actor_framework::mock`] for utilities to test clients without spawning full actors.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
