//! Error types for the Product actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Catalog entries are reference data and cannot be edited.
    #[error("Product {0} is read-only")]
    ReadOnly(String),

    /// Seeding assigned a product an id other than its catalog id.
    #[error("Catalog seeding out of order: expected id {expected}, got {actual}")]
    SeedOutOfOrder { expected: u32, actual: u32 },

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
