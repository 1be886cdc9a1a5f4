//! Error types for the Restaurant actor.

use thiserror::Error;

/// Errors that can occur during restaurant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The requested restaurant was not found.
    #[error("Restaurante no encontrado: {0}")]
    NotFound(String),

    /// The restaurant data provided is invalid.
    #[error("{0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RestaurantError {
    fn from(msg: String) -> Self {
        RestaurantError::ActorCommunicationError(msg)
    }
}
