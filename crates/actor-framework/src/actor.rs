//! # Generic Actor Server
//!
//! The `ResourceActor` owns the entity store for one resource type and processes its
//! requests sequentially, so the store needs no lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::ids::IdGenerator;
use crate::message::ResourceRequest;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// How many times `Create` asks the generator for an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half of a resource: it owns the receiver end of the channel and
/// an insertion-ordered store keyed by id. One task runs one actor, and that task is the
/// only code that ever touches the store. Concurrent callers are serialised by the
/// channel, which is what makes appends atomic with respect to `Get` and `List`.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new(buffer, id_generator)` returns the actor and a client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the returned future on the runtime.
///
/// # Operations
///
/// * **Create**: draws an id from the generator (redrawing while the id is taken, up to
///   a fixed number of attempts), builds the entity with `from_create_params`, runs
///   `on_create`, then inserts. A failure at any step leaves the store untouched.
/// * **Get** / **List**: clones out of the store. `List` preserves insertion order.
/// * **Update** / **Action**: run the entity hook against the stored value in place.
/// * **Delete**: runs `on_delete`, then removes while keeping the order of the rest.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
    next_id: IdGenerator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; senders wait when it is full.
    /// * `next_id` - called once per `Create` to allocate the new entity's id.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    fn allocate_id(&mut self) -> Result<T::Id, FrameworkError> {
        let mut id = (self.next_id)();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.store.contains_key(&id) {
                return Ok(id);
            }
            warn!(%id, "Generated id already in use, drawing another");
            id = (self.next_id)();
        }
        if self.store.contains_key(&id) {
            return Err(FrameworkError::IdConflict {
                attempts: MAX_ID_ATTEMPTS,
                last: id.to_string(),
            });
        }
        Ok(id)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Order" rather than "heladeria::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match self.allocate_id() {
                        Ok(id) => id,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.shift_remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::sequential_ids;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Scoop {
        id: u32,
        flavor: String,
    }

    #[derive(Debug)]
    struct ScoopCreate {
        flavor: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("scoop rejected: {0}")]
    struct ScoopError(String);

    #[async_trait]
    impl ActorEntity for Scoop {
        type Id = u32;
        type Create = ScoopCreate;
        type Update = ();
        type Action = ();
        type ActionResult = ();
        type Context = ();
        type Error = ScoopError;

        fn from_create_params(id: u32, params: ScoopCreate) -> Result<Self, Self::Error> {
            if params.flavor.is_empty() {
                return Err(ScoopError("missing flavor".into()));
            }
            Ok(Self {
                id,
                flavor: params.flavor,
            })
        }

        async fn on_update(&mut self, _: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn create(flavor: &str) -> ScoopCreate {
        ScoopCreate {
            flavor: flavor.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let (actor, client) = ResourceActor::<Scoop>::new(10, sequential_ids());
        tokio::spawn(actor.run(()));

        for flavor in ["Limón", "Frutilla", "Chocolate"] {
            client.create(create(flavor)).await.unwrap();
        }
        client.delete(2).await.unwrap();

        let flavors: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.flavor)
            .collect();
        assert_eq!(flavors, vec!["Limón", "Chocolate"]);
    }

    #[tokio::test]
    async fn test_rejected_create_is_not_stored() {
        let (actor, client) = ResourceActor::<Scoop>::new(10, sequential_ids());
        tokio::spawn(actor.run(()));

        let result = client.create(create("")).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_taken_ids_are_redrawn() {
        // 7, 7, 8: the second create must skip the duplicate 7
        let mut draws = vec![7u32, 7, 8].into_iter();
        let (actor, client) =
            ResourceActor::<Scoop>::new(10, move || draws.next().unwrap_or(99));
        tokio::spawn(actor.run(()));

        assert_eq!(client.create(create("Vainilla")).await.unwrap(), 7);
        assert_eq!(client.create(create("Naranja")).await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_constant_generator_reports_conflict() {
        let (actor, client) = ResourceActor::<Scoop>::new(10, || 1u32);
        tokio::spawn(actor.run(()));

        client.create(create("Vainilla")).await.unwrap();
        let result = client.create(create("Naranja")).await;
        assert!(matches!(
            result,
            Err(FrameworkError::IdConflict { attempts, .. }) if attempts == MAX_ID_ATTEMPTS
        ));
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_entity_reports_not_found() {
        let (actor, client) = ResourceActor::<Scoop>::new(10, sequential_ids());
        tokio::spawn(actor.run(()));

        assert!(client.get(42).await.unwrap().is_none());
        assert!(matches!(
            client.perform_action(42, ()).await,
            Err(FrameworkError::NotFound(id)) if id == "42"
        ));
    }
}
