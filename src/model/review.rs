use crate::model::{ReviewId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// What a review is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewTarget {
    Restaurante,
    Producto,
}

/// Author display name, copied when the review is written and never refreshed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewAuthor {
    #[serde(rename = "nombre")]
    pub name: String,
}

/// A rating with a comment, about the restaurant or one product.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ReviewId,
    #[serde(rename = "tipo")]
    pub target: ReviewTarget,
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    #[serde(rename = "producto_id", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(rename = "calificacion")]
    pub rating: u8,
    #[serde(rename = "comentario")]
    pub comment: String,
    #[serde(rename = "fecha")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "usuario")]
    pub author: ReviewAuthor,
}

/// Payload for creating a review. `rating` is range-checked on creation.
#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub target: ReviewTarget,
    pub user_id: UserId,
    pub product_id: Option<String>,
    pub rating: i64,
    pub comment: String,
}

/// Sort order of a review listing, from the `orden` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewOrder {
    #[default]
    Newest,
    RatingDesc,
    RatingAsc,
}

impl ReviewOrder {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("calificacion_desc") => ReviewOrder::RatingDesc,
            Some("calificacion_asc") => ReviewOrder::RatingAsc,
            _ => ReviewOrder::Newest,
        }
    }

    /// Rating orders fall back to newest first among equal ratings.
    pub fn compare(self, a: &Review, b: &Review) -> Ordering {
        let newest = b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id));
        match self {
            ReviewOrder::Newest => newest,
            ReviewOrder::RatingDesc => b.rating.cmp(&a.rating).then(newest),
            ReviewOrder::RatingAsc => a.rating.cmp(&b.rating).then(newest),
        }
    }
}
