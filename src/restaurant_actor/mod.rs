//! Restaurant-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RestaurantClient;
use crate::framework::ResourceActor;
use crate::model::{Restaurant, RestaurantId};

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, RestaurantId::new);
    let client = RestaurantClient::new(generic_client);

    (actor, client)
}
