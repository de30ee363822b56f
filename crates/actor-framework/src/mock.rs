//! # Mock Framework & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of scripted expectations instead of an actor. Use it to test code that
//! wraps a client (catalog filtering, order search, error mapping) without spawning the
//! entity's actor.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, scripted replies | real store |
//! | **Determinism** | fully deterministic | subject to the scheduler |
//! | **Error injection** | `return_err(..)` | needs a real failing state |
//! | **Use case** | logic *around* a client | the entity hooks or the whole system |
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Cone { id: u32 }
//! #[derive(Debug)] struct ConeCreate;
//! #[derive(Debug)] enum ConeAction {}
//! #[derive(Debug, thiserror::Error)] #[error("cone error")] struct ConeError;
//!
//! #[async_trait]
//! impl ActorEntity for Cone {
//!     type Id = u32; type Create = ConeCreate; type Update = ();
//!     type Action = ConeAction; type ActionResult = (); type Context = (); type Error = ConeError;
//!     fn from_create_params(id: u32, _: ConeCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: ConeAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Cone>::new();
//!     mock.expect_list().return_ok(vec![Cone { id: 1 }, Cone { id: 2 }]);
//!     mock.expect_get(3).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.list().await.unwrap().len(), 2);
//!     assert!(matches!(client.get(3).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For finer control, [`create_mock_client`] returns the raw receiver so a test can
//! inspect each request (`expect_create`, `expect_get`, `expect_list`, `expect_action`)
//! and answer it by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply, consumed in FIFO order by the mock's background task.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    expectations
        .lock()
        .expect("mock expectation queue poisoned")
        .push_back(expectation);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were registered; a request that
/// does not match the next expectation (kind or id) panics the mock task, which the
/// caller observes as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// A client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any registered expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        push(
            &self.expectations,
            Expectation::Get {
                id: self.id,
                response: Ok(value),
            },
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Get {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, values: Vec<T>) {
        push(&self.expectations, Expectation::List { response: Ok(values) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::List {
                response: Err(error),
            },
        );
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        push(&self.expectations, Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Create {
                response: Err(error),
            },
        );
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        push(
            &self.expectations,
            Expectation::Action {
                id: self.id,
                response: Ok(result),
            },
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Action {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on the returned receiver.
///
/// The test plays the actor: it pulls each request with one of the `expect_*` helpers,
/// asserts on the payload, and answers through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Cake {
        id: u32,
        name: String,
        portions: u32,
    }

    #[derive(Debug)]
    struct CakeCreate {
        name: String,
        portions: u32,
    }

    #[derive(Debug)]
    enum CakeAction {
        Slice,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Cake error")]
    struct CakeError;

    #[async_trait]
    impl ActorEntity for Cake {
        type Id = u32;
        type Create = CakeCreate;
        type Update = ();
        type Action = CakeAction;
        type ActionResult = u32;
        type Context = ();
        type Error = CakeError;

        fn from_create_params(id: u32, params: CakeCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
                portions: params.portions,
            })
        }

        async fn on_update(&mut self, _: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CakeAction,
            _ctx: &Self::Context,
        ) -> Result<u32, Self::Error> {
            match action {
                CakeAction::Slice => {
                    self.portions = self.portions.saturating_sub(1);
                    Ok(self.portions)
                }
            }
        }
    }

    fn tiramisu(id: u32) -> Cake {
        Cake {
            id,
            name: "Torta Especial Tiramisú".to_string(),
            portions: 10,
        }
    }

    #[tokio::test]
    async fn test_raw_channel_create_round() {
        let (client, mut receiver) = create_mock_client::<Cake>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(CakeCreate {
                    name: "Torta Chocolate".to_string(),
                    portions: 8,
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Torta Chocolate");
        assert_eq!(payload.portions, 8);
        responder.send(Ok(1)).unwrap();

        assert!(matches!(create_task.await.unwrap(), Ok(1)));
    }

    #[tokio::test]
    async fn test_raw_channel_list_round() {
        let (client, mut receiver) = create_mock_client::<Cake>(10);

        let list_task = tokio::spawn(async move { client.list().await });

        let responder = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        responder.send(Ok(vec![tiramisu(4), tiramisu(9)])).unwrap();

        let ids: Vec<u32> = list_task
            .await
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![4, 9]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Cake>::new();

        mock.expect_create().return_ok(9);
        mock.expect_get(9).return_ok(Some(tiramisu(9)));
        mock.expect_action(9).return_ok(9);
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = mock.client();

        let id = client
            .create(CakeCreate {
                name: "Torta Especial Tiramisú".to_string(),
                portions: 10,
            })
            .await
            .unwrap();
        assert_eq!(id, 9);

        let fetched = client.get(9).await.unwrap();
        assert_eq!(fetched, Some(tiramisu(9)));

        assert_eq!(client.perform_action(9, CakeAction::Slice).await.unwrap(), 9);
        assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unused_expectations() {
        let mut mock = MockClient::<Cake>::new();
        mock.expect_get(1).return_ok(None);
        mock.verify();
    }
}
