//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Handlers never build actor messages themselves; they call these clients,
//! which translate domain operations into requests and framework errors into
//! each actor's own error type.

pub mod actor_client;
pub mod order_client;
pub mod product_client;
pub mod restaurant_client;
pub mod review_client;
pub mod user_client;

pub use actor_client::*;
pub use order_client::*;
pub use product_client::*;
pub use restaurant_client::*;
pub use review_client::*;
pub use user_client::*;
