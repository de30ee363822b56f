//! # ActorEntity Trait
//!
//! The contract every resource must satisfy to be managed by a
//! [`ResourceActor`](crate::ResourceActor): associated types for ids, payloads, actions,
//! injected context and errors, plus the lifecycle hooks the actor calls while it
//! processes requests.
//!
//! `on_create` and `on_delete` have no-op defaults. `on_update` and `handle_action` must
//! be written by every entity, even if only to reject the request.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can talk to other actors. The `Context` type is passed to
/// every hook and is supplied once, when the actor loop starts.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum of resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum for the whole entity rather than one per message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the freshly allocated id and the create payload.
    ///
    /// Returning an error aborts the create; nothing is stored.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is inserted into the store.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
