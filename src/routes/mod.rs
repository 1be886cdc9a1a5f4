//! HTTP surface.
//!
//! Handlers are thin: they validate ids and query parameters, call a typed
//! client and shape the JSON answer. Business rules live in the entities.

pub mod auth;
pub mod error;
pub mod extract;
pub mod orders;
pub mod products;
pub mod restaurants;
pub mod reviews;

pub use error::*;
pub use extract::*;

use crate::clients::{OrderClient, ProductClient, RestaurantClient, ReviewClient, UserClient};
use crate::lifecycle::RestaurantSystem;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Clients shared by every handler. Cloning only clones channel senders.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub restaurants: RestaurantClient,
    pub products: ProductClient,
    pub orders: OrderClient,
    pub reviews: ReviewClient,
}

impl From<&RestaurantSystem> for AppState {
    fn from(system: &RestaurantSystem) -> Self {
        Self {
            users: system.user_client.clone(),
            restaurants: system.restaurant_client.clone(),
            products: system.product_client.clone(),
            orders: system.order_client.clone(),
            reviews: system.review_client.clone(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/restaurantes", get(restaurants::list).post(restaurants::create))
        .route("/restaurantes/:id", put(restaurants::update))
        .route("/restaurantes/:id/menu", get(restaurants::menu))
        .route("/productos", get(products::list))
        .route("/pedidos", get(orders::list_for_user))
        .route("/pedidos/admin", get(orders::list_admin))
        .route(
            "/pedidos/multiples",
            post(orders::create_many).delete(orders::delete_many),
        )
        .route("/pedidos/actualizar-estado", put(orders::update_status))
        .route("/pedidos/usuario/:usuario_id", delete(orders::delete_for_user))
        .route("/pedidos/:id", delete(orders::delete_one))
        .route(
            "/resenas/restaurante",
            get(reviews::list_restaurant).post(reviews::create_restaurant),
        )
        .route(
            "/resenas/producto",
            get(reviews::list_products).post(reviews::create_product),
        )
        .route("/resenas/producto/:producto_id", get(reviews::list_product))
        .route("/resenas/:id", delete(reviews::delete))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
