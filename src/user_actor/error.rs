//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("Usuario no encontrado: {0}")]
    NotFound(String),

    /// A user with the same email already exists.
    #[error("Usuario ya existe: {0}")]
    AlreadyExists(String),

    /// The supplied password does not match the stored hash.
    #[error("Contraseña incorrecta")]
    InvalidPassword,

    /// The user data provided is invalid.
    #[error("{0}")]
    ValidationError(String),

    /// Hashing or verifying a password failed.
    #[error("Password hashing error: {0}")]
    HashingError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}
