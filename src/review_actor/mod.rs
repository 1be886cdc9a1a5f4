//! Review-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ReviewClient;
use crate::framework::ResourceActor;
use crate::model::{Review, ReviewId};

/// Creates a new Review actor and its client.
///
/// Like orders, reviews run with a [`UserClient`](crate::clients::UserClient)
/// as context to resolve their author.
pub fn new(buffer_size: usize) -> (ResourceActor<Review>, ReviewClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ReviewId::new);
    let client = ReviewClient::new(generic_client);

    (actor, client)
}
