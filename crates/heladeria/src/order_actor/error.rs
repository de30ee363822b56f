//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The submission is missing required customer fields or items.
    #[error("{0}")]
    Validation(String),

    #[error("Order not found: {0}")]
    NotFound(String),

    /// Orders are immutable once submitted.
    #[error("Order {0} cannot be modified")]
    Immutable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
