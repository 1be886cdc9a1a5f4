//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.
//!
//! Rust field names are English; the JSON names are the ones the frontend
//! speaks and are set with `serde` renames.

pub mod ids;
pub mod order;
pub mod product;
pub mod restaurant;
pub mod review;
pub mod user;

pub use ids::*;
pub use order::*;
pub use product::*;
pub use restaurant::*;
pub use review::*;
pub use user::*;
