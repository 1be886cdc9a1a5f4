//! Generic actor framework for resource storage.
//!
//! This module provides the building blocks every store in the service is made of:
//! one actor per entity type, owning its entities and answering CRUD and query
//! requests over a channel.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a store of entities
//! - [`ResourceClient`] - Typed handle for sending requests to an actor
//! - [`Query`] - Filter / order / paginate inside the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test entities and clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
