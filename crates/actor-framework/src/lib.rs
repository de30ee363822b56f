//! # Actor Framework
//!
//! Building blocks for type-safe resource actors on top of Tokio.
//!
//! Each resource type (a catalog product, a customer order, ...) lives inside its own
//! [`ResourceActor`], a task that owns the entity store and processes requests one at a
//! time. Callers never touch the store directly: they hold a cheap, cloneable
//! [`ResourceClient`] that sends CRUD + Action requests over a channel and awaits the
//! reply on a oneshot.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain data plus lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop, id assignment, ordered store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed request/response
//!
//! Business rules are written once, in the entity's hooks. The actor takes care of
//! sequencing, so two concurrent `create` calls can never interleave their writes and a
//! `list` never observes a half-applied insert.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{sequential_ids, ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Flavor {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct FlavorCreate { name: String }
//! #[derive(Debug)] enum FlavorAction {}
//! #[derive(Debug, thiserror::Error)] #[error("flavor error")] struct FlavorError;
//!
//! #[async_trait]
//! impl ActorEntity for Flavor {
//!     type Id = u32;
//!     type Create = FlavorCreate;
//!     type Update = String;
//!     type Action = FlavorAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = FlavorError;
//!
//!     fn from_create_params(id: u32, params: FlavorCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, name: String, _ctx: &()) -> Result<(), Self::Error> {
//!         self.name = name;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: FlavorAction, _ctx: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Flavor>::new(10, sequential_ids());
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(FlavorCreate { name: "Dulce de Leche".into() }).await.unwrap();
//!     let flavor = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(flavor.name, "Dulce de Leche");
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`] rather than to the constructor, so
//! actors can be created first and wired afterwards. Entities without dependencies use
//! `type Context = ()`.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`] and raw-channel helpers for testing
//! client wrappers without spawning real actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use ids::{sequential_ids, IdGenerator};
pub use message::{ResourceRequest, Response};
