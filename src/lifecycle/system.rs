use crate::clients::{OrderClient, ProductClient, RestaurantClient, ReviewClient, UserClient};
use tracing::{error, info};

/// The runtime orchestrator for the restaurant service.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Orders and reviews both need the user store, so
///   their actors run with a [`UserClient`] as context
///
/// # Architecture
///
/// - **User Actor**: accounts, unique by email
/// - **Restaurant Actor**: restaurants and their summarized menus
/// - **Product Actor**: the catalog
/// - **Order Actor**: orders; checks the owner exists on creation
/// - **Review Actor**: reviews; snapshots the author's name on creation
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(32);
///
/// let user_id = system.user_client.register(registration).await?;
/// let ids = system.order_client.create_orders(orders).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub user_client: UserClient,
    pub restaurant_client: RestaurantClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub review_client: ReviewClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawns every actor, each with a request channel of `buffer_size`.
    pub fn new(buffer_size: usize) -> Self {
        // 1. Create actors
        let (user_actor, user_client) = crate::user_actor::new(buffer_size);
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new(buffer_size);
        let (product_actor, product_client) = crate::product_actor::new(buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(buffer_size);
        let (review_actor, review_client) = crate::review_actor::new(buffer_size);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(user_client.clone())),
            tokio::spawn(review_actor.run(user_client.clone())),
        ];
        info!(actors = handles.len(), buffer_size, "System started");

        Self {
            user_client,
            restaurant_client,
            product_client,
            order_client,
            review_client,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor drains its queue
    /// and exits. The user actor stops last, once the order and review actors
    /// have released the clients they hold as context. Any other clone still
    /// alive (e.g. inside a router) keeps its actor running, so drop those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.review_client);
        drop(self.product_client);
        drop(self.restaurant_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
