//! Entity trait implementation for the Review domain type.
//!
//! `on_create` looks the author up and copies their display name into the
//! review. The copy is never refreshed afterwards.

use crate::clients::{ActorClient, UserClient};
use crate::framework::ActorEntity;
use crate::model::{Review, ReviewAuthor, ReviewCreate, ReviewId, ReviewTarget};
use crate::review_actor::ReviewError;
use async_trait::async_trait;
use chrono::Utc;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[async_trait]
impl ActorEntity for Review {
    type Id = ReviewId;
    type Create = ReviewCreate;
    type Update = ();
    type Context = UserClient;
    type Error = ReviewError;

    fn from_create_params(id: ReviewId, params: ReviewCreate) -> Result<Self, ReviewError> {
        let rating = u8::try_from(params.rating)
            .ok()
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(&i64::from(*r)))
            .ok_or_else(|| {
                ReviewError::ValidationError("Calificación inválida (debe ser 1-5)".to_string())
            })?;

        let comment = params.comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::ValidationError("El comentario es requerido".to_string()));
        }

        let product_id = match params.target {
            ReviewTarget::Producto => Some(
                params
                    .product_id
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .ok_or_else(|| {
                        ReviewError::ValidationError("ID de producto es requerido".to_string())
                    })?,
            ),
            ReviewTarget::Restaurante => None,
        };

        Ok(Self {
            id,
            target: params.target,
            user_id: params.user_id,
            product_id,
            rating,
            comment: comment.to_string(),
            created_at: Utc::now(),
            author: ReviewAuthor {
                name: String::new(),
            },
        })
    }

    async fn on_create(&mut self, users: &UserClient) -> Result<(), ReviewError> {
        let author = users
            .get(self.user_id)
            .await
            .map_err(|e| ReviewError::ActorCommunicationError(e.to_string()))?
            .ok_or_else(|| ReviewError::AuthorNotFound(self.user_id.to_string()))?;
        self.author.name = author.display_name();
        Ok(())
    }

    /// Reviews are immutable once published.
    async fn on_update(&mut self, _update: (), _ctx: &UserClient) -> Result<(), ReviewError> {
        Ok(())
    }
}
