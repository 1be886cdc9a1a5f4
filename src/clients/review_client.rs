use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, Query, ResourceClient};
use crate::model::{Review, ReviewCreate, ReviewId, ReviewOrder, ReviewTarget, UserId};
use crate::review_actor::ReviewError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Review actor.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
}

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, params: ReviewCreate) -> Result<ReviewId, ReviewError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Review published");
        Ok(id)
    }

    /// Reviews of one kind. For product reviews, `product_id` narrows the
    /// listing to a single product.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        target: ReviewTarget,
        product_id: Option<String>,
        order: ReviewOrder,
    ) -> Result<Vec<Review>, ReviewError> {
        debug!("Sending request");
        let query = Query::all()
            .filter(move |r: &Review| {
                r.target == target
                    && product_id
                        .as_deref()
                        .map_or(true, |p| r.product_id.as_deref() == Some(p))
            })
            .order_by(move |a: &Review, b: &Review| order.compare(a, b));
        let page = self.inner.query(query).await.map_err(Self::map_error)?;
        Ok(page.items)
    }

    /// Deletes a review only when `author` wrote it. A missing review and a
    /// review by someone else are both [`ReviewError::NotFound`].
    #[instrument(skip(self))]
    pub async fn delete_by_author(&self, id: ReviewId, author: UserId) -> Result<(), ReviewError> {
        let deleted = self
            .inner
            .delete_where(move |r: &Review| r.id == id && r.user_id == author)
            .await
            .map_err(Self::map_error)?;
        if deleted == 0 {
            return Err(ReviewError::NotFound(id.to_string()));
        }
        info!(%id, "Review deleted");
        Ok(())
    }
}

#[async_trait]
impl ActorClient<Review> for ReviewClient {
    type Error = ReviewError;

    fn inner(&self) -> &ResourceClient<Review> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity(|e| match e {
            FrameworkError::NotFound(id) => ReviewError::NotFound(id),
            other => ReviewError::ActorCommunicationError(other.to_string()),
        })
    }
}
