//! Startup catalog loading.
//!
//! Products have no write endpoint; the catalog (and optionally a set of
//! restaurants) comes from a JSON file named by `CATALOG_SEED`:
//!
//! ```json
//! {
//!   "productos": [{"Nombre": "Tacos", "Precio": 45, "Categoría": "Plato"}],
//!   "restaurantes": [{"nombre": "Central", "ubicacion": "Centro"}]
//! }
//! ```

use crate::clients::{ProductClient, RestaurantClient};
use crate::model::{ProductCreate, RestaurantCreate};
use crate::product_actor::ProductError;
use crate::restaurant_actor::RestaurantError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Restaurant(#[from] RestaurantError),
}

#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "productos")]
    pub products: Vec<ProductCreate>,
    #[serde(default, rename = "restaurantes")]
    pub restaurants: Vec<RestaurantCreate>,
}

/// How much of the catalog was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub products: usize,
    pub restaurants: usize,
}

#[instrument(skip(products, restaurants))]
pub async fn load_catalog(
    path: &Path,
    products: &ProductClient,
    restaurants: &RestaurantClient,
) -> Result<SeedSummary, SeedError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Catalog = serde_json::from_str(&raw)?;
    seed_catalog(catalog, products, restaurants).await
}

/// Stores the products as one all-or-nothing batch, then the restaurants.
pub async fn seed_catalog(
    catalog: Catalog,
    products: &ProductClient,
    restaurants: &RestaurantClient,
) -> Result<SeedSummary, SeedError> {
    let product_ids = products.create_many(catalog.products).await?;

    let mut restaurant_count = 0;
    for restaurant in catalog.restaurants {
        restaurants.create(restaurant).await?;
        restaurant_count += 1;
    }

    let summary = SeedSummary {
        products: product_ids.len(),
        restaurants: restaurant_count,
    };
    info!(products = summary.products, restaurants = summary.restaurants, "Catalog loaded");
    Ok(summary)
}
