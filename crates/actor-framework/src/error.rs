//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to the domain errors each
//! entity defines. Entity errors travel boxed inside [`FrameworkError::EntityError`] and
//! can be recovered with `downcast`.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The id generator kept returning ids that are already in the store.
    #[error("Could not allocate a free id after {attempts} attempts (last: {last})")]
    IdConflict { attempts: usize, last: String },
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
