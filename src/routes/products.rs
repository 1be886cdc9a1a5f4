use crate::model::{ProductSort, ProductView};
use crate::routes::{AppError, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ProductParams {
    #[serde(rename = "Categoría")]
    category: Option<String>,
    #[serde(rename = "ordenar")]
    sort: Option<String>,
}

/// `GET /productos?Categoría=&ordenar=`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductParams>,
) -> Result<Json<Vec<ProductView>>, AppError> {
    let category = params.category.filter(|c| !c.is_empty());
    let sort = ProductSort::from_param(params.sort.as_deref());
    Ok(Json(state.products.list(category, sort).await?))
}
