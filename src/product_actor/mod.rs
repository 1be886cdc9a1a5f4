//! Product-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::{Product, ProductId};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ProductId::new);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
