//! # Restaurant Orders
//!
//! REST backend for a restaurant ordering application: registration and login,
//! restaurant and menu browsing, the product catalog, multi-ticket orders with
//! client and admin views, and reviews of the restaurant and its products.
//!
//! ## Design
//!
//! Every entity type lives in its own actor. A [`ResourceActor`](framework::ResourceActor)
//! owns an in-memory store and handles one request at a time, so rules that
//! span a whole store hold without locks:
//! - an email is registered at most once
//! - a batch of tickets is stored completely or not at all
//! - pagination, filtering and sorting run next to the data
//!
//! Dependencies between stores are injected when an actor starts: the order and
//! review actors run with a [`UserClient`](clients::UserClient) as context and use it
//! in their `on_create` hooks.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>`, its client, [`Query`](framework::Query) and the
//! [`MockClient`](framework::mock::MockClient) used in tests.
//!
//! ### 2. The Entities ([`user_actor`], [`restaurant_actor`], [`product_actor`], [`order_actor`], [`review_actor`])
//! `ActorEntity` implementations, per-actor error types and factories. The
//! data types themselves are in [`model`].
//!
//! ### 3. The Interface ([`clients`])
//! Domain operations (`register`, `create_orders`, `list_page`, ...) on top of
//! the generic client.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`RestaurantSystem`](lifecycle::RestaurantSystem) spawns and wires the actors and
//! shuts them down; [`lifecycle::tracing`] sets up logging.
//!
//! ### 5. The Surface ([`routes`])
//! The `axum` router, with [`config`] and [`seed`] used at startup.
//!
//! ## Running
//!
//! ```bash
//! CATALOG_SEED=data/catalog.json PORT=4000 RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod restaurant_actor;
pub mod review_actor;
pub mod routes;
pub mod seed;
pub mod user_actor;
