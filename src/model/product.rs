use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A catalog product.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// Products are loaded from the catalog seed and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Descripción")]
    pub description: String,
    #[serde(rename = "Precio")]
    pub price: f64,
    #[serde(rename = "Ingredientes")]
    pub ingredients: Vec<String>,
    #[serde(rename = "Categoría")]
    pub category: String,
}

/// Payload for creating a new product, as found in the catalog seed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductCreate {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Descripción", default)]
    pub description: String,
    #[serde(rename = "Precio", default)]
    pub price: f64,
    #[serde(rename = "Ingredientes", default)]
    pub ingredients: Vec<String>,
    #[serde(rename = "Categoría", default)]
    pub category: String,
}

/// Public projection of a product: no id, no category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Descripción")]
    pub description: String,
    #[serde(rename = "Precio")]
    pub price: f64,
    #[serde(rename = "Ingredientes")]
    pub ingredients: Vec<String>,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            ingredients: product.ingredients,
        }
    }
}

/// Price ordering for product listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    PriceAsc,
    PriceDesc,
}

impl ProductSort {
    /// `ordenar=desc` sorts descending; anything else ascending.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("desc") => ProductSort::PriceDesc,
            _ => ProductSort::PriceAsc,
        }
    }

    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        let ordering = a.price.total_cmp(&b.price);
        match self {
            ProductSort::PriceAsc => ordering,
            ProductSort::PriceDesc => ordering.reverse(),
        }
    }
}
