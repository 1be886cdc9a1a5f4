use crate::model::{Order, OrderId, OrderPage, OrderStatus, PageRequest, Ticket, UserId};
use crate::routes::{parse_id, require_id, AppError, AppJson, AppState};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

const MISSING_USER: &str = "ID de usuario no proporcionado";
const INVALID_USER: &str = "ID de usuario inválido";
const INVALID_ORDER: &str = "ID de pedido inválido";

#[derive(Debug, Deserialize)]
pub struct CreateOrdersBody {
    #[serde(rename = "usuarioId")]
    user_id: Option<String>,
    tickets: Option<Value>,
}

/// `POST /pedidos/multiples`
pub async fn create_many(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateOrdersBody>,
) -> Result<Json<Value>, AppError> {
    let user_id: UserId = require_id(body.user_id.as_deref(), MISSING_USER, INVALID_USER)?;
    let tickets = match body.tickets {
        Some(tickets @ Value::Array(_)) => tickets,
        _ => return Err(AppError::bad_request("Se requiere un array de pedidos")),
    };
    let tickets: Vec<Ticket> = serde_json::from_value(tickets)
        .map_err(|e| AppError::bad_request(format!("Pedido inválido: {e}")))?;

    let orders = tickets
        .into_iter()
        .map(|ticket| ticket.into_order(user_id))
        .collect();
    let ids = state.orders.create_orders(orders).await?;

    Ok(Json(json!({
        "mensaje": format!("{} pedidos creados exitosamente", ids.len()),
        "ids": ids,
    })))
}

#[derive(Debug, Deserialize)]
pub struct UserOrdersParams {
    #[serde(rename = "usuarioId")]
    user_id: Option<String>,
    #[serde(rename = "estado")]
    status: Option<String>,
}

/// `GET /pedidos?usuarioId=&estado=`
pub async fn list_for_user(
    State(state): State<AppState>,
    Query(params): Query<UserOrdersParams>,
) -> Result<Json<Vec<Order>>, AppError> {
    let user_id: UserId = require_id(params.user_id.as_deref(), MISSING_USER, INVALID_USER)?;
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<OrderStatus>)
        .transpose()
        .map_err(|e| AppError::bad_request(e.to_string()))?;
    Ok(Json(state.orders.list_for_user(user_id, status).await?))
}

#[derive(Debug, Deserialize)]
pub struct AdminParams {
    page: Option<String>,
    limit: Option<String>,
}

/// `GET /pedidos/admin?page=&limit=`
pub async fn list_admin(
    State(state): State<AppState>,
    Query(params): Query<AdminParams>,
) -> Result<Json<OrderPage>, AppError> {
    let request = PageRequest::from_params(params.page.as_deref(), params.limit.as_deref());
    Ok(Json(state.orders.list_page(request).await?))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    ids: Option<Value>,
    #[serde(rename = "nuevoEstado")]
    status: Option<String>,
}

/// `PUT /pedidos/actualizar-estado`
pub async fn update_status(
    State(state): State<AppState>,
    AppJson(body): AppJson<UpdateStatusBody>,
) -> Result<Json<Value>, AppError> {
    const INVALID: &str = "Parámetros inválidos";
    let ids = order_ids(body.ids, INVALID)?;
    let status: OrderStatus = body
        .status
        .ok_or_else(|| AppError::bad_request(INVALID))?
        .parse()
        .map_err(|e: crate::model::InvalidStatus| AppError::bad_request(e.to_string()))?;

    let updated = state.orders.update_status(ids, status).await?;
    Ok(Json(json!({
        "mensaje": format!("{updated} pedidos actualizados"),
        "actualizados": updated,
    })))
}

#[derive(Debug, Deserialize)]
pub struct DeleteManyBody {
    ids: Option<Value>,
}

/// `DELETE /pedidos/multiples`
pub async fn delete_many(
    State(state): State<AppState>,
    AppJson(body): AppJson<DeleteManyBody>,
) -> Result<Json<Value>, AppError> {
    let ids = order_ids(body.ids, "IDs inválidos")?;
    let deleted = state.orders.delete_many(ids).await?;
    Ok(Json(json!({
        "mensaje": format!("{deleted} pedidos eliminados"),
        "eliminados": deleted,
    })))
}

#[derive(Debug, Default, Deserialize)]
struct OwnerBody {
    #[serde(rename = "usuarioId")]
    user_id: Option<String>,
}

/// `DELETE /pedidos/:id`
///
/// The body is optional. With `{"usuarioId"}` only that user's order is
/// deleted; without it any order matches.
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let id: OrderId = parse_id(&id, INVALID_ORDER)?;

    let owner_body = if body.iter().all(u8::is_ascii_whitespace) {
        OwnerBody::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::bad_request(format!("JSON inválido: {e}")))?
    };
    let owner: Option<UserId> = owner_body
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(|raw| parse_id(raw, INVALID_USER))
        .transpose()?;

    state.orders.delete_one(id, owner).await?;
    Ok(Json(json!({ "mensaje": "Pedido eliminado correctamente" })))
}

/// `DELETE /pedidos/usuario/:usuario_id`
pub async fn delete_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user_id: UserId = parse_id(&user_id, INVALID_USER)?;
    let deleted = state.orders.delete_for_user(user_id).await?;
    Ok(Json(json!({
        "mensaje": format!("{deleted} pedidos eliminados"),
        "eliminados": deleted,
    })))
}

/// A JSON array of order id strings; anything else is `message`.
fn order_ids(ids: Option<Value>, message: &str) -> Result<Vec<OrderId>, AppError> {
    let Some(Value::Array(ids)) = ids else {
        return Err(AppError::bad_request(message));
    };
    ids.iter()
        .map(|id| {
            id.as_str()
                .ok_or_else(|| AppError::bad_request(message))
                .and_then(|raw| parse_id(raw, message))
        })
        .collect()
}
