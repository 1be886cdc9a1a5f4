use crate::model::{Review, ReviewCreate, ReviewId, ReviewOrder, ReviewTarget, UserId};
use crate::routes::{parse_id, require_id, AppError, AppJson, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

const MISSING_USER: &str = "ID de usuario no proporcionado";
const INVALID_USER: &str = "ID de usuario inválido";
const INVALID_RATING: &str = "Calificación inválida (debe ser 1-5)";
const MISSING_PRODUCT: &str = "ID de producto es requerido";

#[derive(Debug, Deserialize)]
pub struct ListParams {
    orden: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewBody {
    usuario_id: Option<String>,
    producto_id: Option<String>,
    calificacion: Option<Value>,
    #[serde(default)]
    comentario: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteReviewBody {
    usuario_id: Option<String>,
}

/// `GET /resenas/restaurante?orden=`
pub async fn list_restaurant(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Review>>, AppError> {
    let order = ReviewOrder::from_param(params.orden.as_deref());
    Ok(Json(state.reviews.list(ReviewTarget::Restaurante, None, order).await?))
}

/// `GET /resenas/producto?orden=`
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Review>>, AppError> {
    let order = ReviewOrder::from_param(params.orden.as_deref());
    Ok(Json(state.reviews.list(ReviewTarget::Producto, None, order).await?))
}

/// `GET /resenas/producto/:producto_id?orden=`
pub async fn list_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Review>>, AppError> {
    let product_id = product_id.trim();
    if product_id.is_empty() {
        return Err(AppError::bad_request(MISSING_PRODUCT));
    }
    let order = ReviewOrder::from_param(params.orden.as_deref());
    let reviews = state
        .reviews
        .list(ReviewTarget::Producto, Some(product_id.to_string()), order)
        .await?;
    Ok(Json(reviews))
}

/// `POST /resenas/restaurante`
pub async fn create_restaurant(
    state: State<AppState>,
    AppJson(body): AppJson<ReviewBody>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    create(state, ReviewTarget::Restaurante, body).await
}

/// `POST /resenas/producto`
pub async fn create_product(
    state: State<AppState>,
    AppJson(body): AppJson<ReviewBody>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    create(state, ReviewTarget::Producto, body).await
}

async fn create(
    State(state): State<AppState>,
    target: ReviewTarget,
    body: ReviewBody,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let user_id: UserId = require_id(body.usuario_id.as_deref(), MISSING_USER, INVALID_USER)?;
    let product_id = match target {
        ReviewTarget::Producto => Some(
            body.producto_id
                .filter(|p| !p.trim().is_empty())
                .ok_or_else(|| AppError::bad_request(MISSING_PRODUCT))?,
        ),
        ReviewTarget::Restaurante => None,
    };
    let rating = parse_rating(body.calificacion.as_ref())?;

    let id = state
        .reviews
        .create(ReviewCreate {
            target,
            user_id,
            product_id,
            rating,
            comment: body.comentario,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "_id": id, "mensaje": "Reseña publicada con éxito" })),
    ))
}

/// `DELETE /resenas/:id`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<DeleteReviewBody>,
) -> Result<Json<Value>, AppError> {
    let id: ReviewId = parse_id(&id, "ID de reseña inválido")?;
    let author: UserId = require_id(body.usuario_id.as_deref(), INVALID_USER, INVALID_USER)?;
    state.reviews.delete_by_author(id, author).await?;
    Ok(Json(json!({ "mensaje": "Reseña eliminada correctamente" })))
}

/// Ratings arrive as numbers or numeric strings. Only whole values are
/// accepted here; the 1-5 range is checked by the review itself.
fn parse_rating(value: Option<&Value>) -> Result<i64, AppError> {
    let rating = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    rating.ok_or_else(|| AppError::bad_request(INVALID_RATING))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(Some(&json!(4))).unwrap(), 4);
        assert_eq!(parse_rating(Some(&json!(5.0))).unwrap(), 5);
        assert_eq!(parse_rating(Some(&json!(" 3 "))).unwrap(), 3);
        assert_eq!(parse_rating(Some(&json!(0))).unwrap(), 0);

        assert!(parse_rating(Some(&json!(4.5))).is_err());
        assert!(parse_rating(Some(&json!("cinco"))).is_err());
        assert!(parse_rating(Some(&Value::Null)).is_err());
        assert!(parse_rating(None).is_err());
    }
}
