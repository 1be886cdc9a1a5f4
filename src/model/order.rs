use crate::model::{OrderId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Order lifecycle: `pendiente → en_proceso → completado`.
///
/// Any status may be written over any other; only the value set is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pendiente,
    EnProceso,
    Completado,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "pendiente",
            OrderStatus::EnProceso => "en_proceso",
            OrderStatus::Completado => "completado",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the known set.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Estado inválido: {0}")]
pub struct InvalidStatus(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pendiente" => Ok(OrderStatus::Pendiente),
            "en_proceso" => Ok(OrderStatus::EnProceso),
            "completado" => Ok(OrderStatus::Completado),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Domicilio,
    Recoger,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(alias = "lat")]
    pub latitud: f64,
    #[serde(alias = "lng")]
    pub longitud: f64,
}

/// Where a `domicilio` order is delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryLocation {
    #[serde(rename = "coordenadas")]
    pub coordinates: Coordinates,
    #[serde(rename = "direccion", default)]
    pub address: String,
}

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "_id")]
    pub product_id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    #[serde(rename = "productos")]
    pub items: Vec<LineItem>,
    pub total: f64,
    #[serde(rename = "tipo_entrega")]
    pub delivery: DeliveryType,
    /// Present iff `delivery` is [`DeliveryType::Domicilio`].
    #[serde(rename = "ubicacion", skip_serializing_if = "Option::is_none")]
    pub location: Option<DeliveryLocation>,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "fecha")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Newest first; ties broken by id so pages are stable.
    pub fn newest_first(a: &Order, b: &Order) -> std::cmp::Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub delivery: DeliveryType,
    pub location: Option<DeliveryLocation>,
}

/// The only mutable part of an order is its status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

// =============================================================================
// Ticket input
// =============================================================================

/// Line item as submitted by the client. Every field is optional; upper-case
/// `Nombre` / `Precio` keys are accepted as well.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketItem {
    #[serde(rename = "_id")]
    pub product_id: Option<String>,
    #[serde(rename = "nombre", alias = "Nombre")]
    pub name: Option<String>,
    #[serde(rename = "precio", alias = "Precio")]
    pub price: Option<f64>,
    #[serde(rename = "cantidad")]
    pub quantity: Option<u32>,
}

impl TicketItem {
    fn normalize(self) -> LineItem {
        LineItem {
            product_id: self
                .product_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string()[..8].to_string()),
            name: self
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "Producto sin nombre".to_string()),
            price: self.price.unwrap_or(0.0),
            quantity: self.quantity.filter(|q| *q > 0).unwrap_or(1),
        }
    }
}

/// One ticket of a multi-order submission.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    #[serde(rename = "productos", default)]
    pub items: Vec<TicketItem>,
    pub total: Option<f64>,
    #[serde(rename = "tipo_entrega")]
    pub delivery: DeliveryType,
    #[serde(rename = "ubicacion")]
    pub location: Option<DeliveryLocation>,
}

impl Ticket {
    /// Fills line item defaults and computes the total when none was given.
    pub fn into_order(self, user_id: UserId) -> OrderCreate {
        let items: Vec<LineItem> = self.items.into_iter().map(TicketItem::normalize).collect();
        let total = self
            .total
            .unwrap_or_else(|| items.iter().map(LineItem::subtotal).sum());
        OrderCreate {
            user_id,
            items,
            total,
            delivery: self.delivery,
            location: self.location,
        }
    }
}

// =============================================================================
// Admin pagination
// =============================================================================

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// A 1-based page request. Zero or unparsable values fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        fn positive(value: Option<&str>) -> Option<usize> {
            value
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|v| *v > 0)
        }
        Self {
            page: positive(page).unwrap_or(DEFAULT_PAGE),
            limit: positive(limit).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn skip(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.limit)
    }
}

/// One page of the admin order listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPage {
    #[serde(rename = "pedidos")]
    pub orders: Vec<Order>,
    #[serde(rename = "currentPage")]
    pub current_page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "totalPedidos")]
    pub total: usize,
}
