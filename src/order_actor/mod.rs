//! Order-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::{Order, OrderId};

/// Creates a new Order actor and its client.
///
/// The actor must be run with a [`UserClient`](crate::clients::UserClient) as
/// context; `on_create` uses it to check the order's owner.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, OrderId::new);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
