//! Error types for the Order actor.

use crate::model::InvalidStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found, or is not owned by the requester.
    #[error("Pedido no encontrado o no autorizado: {0}")]
    NotFound(String),

    /// The user placing the order does not exist.
    #[error("Usuario no encontrado: {0}")]
    InvalidUser(String),

    /// The order data provided is invalid.
    #[error("{0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<InvalidStatus> for OrderError {
    fn from(e: InvalidStatus) -> Self {
        OrderError::ValidationError(e.to_string())
    }
}
