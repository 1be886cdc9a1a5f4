use crate::model::{MenuItem, Restaurant, RestaurantCreate, RestaurantFilter, RestaurantId, RestaurantUpdate};
use crate::routes::{parse_id, AppError, AppJson, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

const INVALID_ID: &str = "ID de restaurante inválido";

/// `GET /restaurantes?nombre=&ubicacion=`
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<RestaurantFilter>,
) -> Result<Json<Vec<Restaurant>>, AppError> {
    Ok(Json(state.restaurants.list(filter).await?))
}

/// `POST /restaurantes`
pub async fn create(
    State(state): State<AppState>,
    AppJson(params): AppJson<RestaurantCreate>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = state.restaurants.create(params).await?;
    Ok((StatusCode::CREATED, Json(json!({ "_id": id }))))
}

/// `PUT /restaurantes/:id`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(update): AppJson<RestaurantUpdate>,
) -> Result<Json<Restaurant>, AppError> {
    let id: RestaurantId = parse_id(&id, INVALID_ID)?;
    Ok(Json(state.restaurants.update(id, update).await?))
}

/// `GET /restaurantes/:id/menu`
pub async fn menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let id: RestaurantId = parse_id(&id, INVALID_ID)?;
    Ok(Json(state.restaurants.menu(id).await?))
}
