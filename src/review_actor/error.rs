//! Error types for the Review actor.

use thiserror::Error;

/// Errors that can occur during review operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    /// The review does not exist or the requester is not its author.
    #[error("Reseña no encontrada o no tienes permiso para eliminarla: {0}")]
    NotFound(String),

    /// The author of a new review does not exist.
    #[error("Usuario no encontrado: {0}")]
    AuthorNotFound(String),

    /// The review data provided is invalid.
    #[error("{0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ReviewError {
    fn from(msg: String) -> Self {
        ReviewError::ActorCommunicationError(msg)
    }
}
