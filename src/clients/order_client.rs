use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, Query, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderPage, OrderStatus, OrderUpdate, PageRequest, UserId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Owner validation happens in the Order actor's `on_create` hook; this client
/// only shapes requests. Every read and write is a single message, so filtering,
/// sorting and pagination all happen inside the actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Inserts every ticket or none of them.
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub async fn create_orders(&self, orders: Vec<OrderCreate>) -> Result<Vec<OrderId>, OrderError> {
        debug!(?orders, "create_orders called");
        let ids = self.inner.create_many(orders).await.map_err(Self::map_error)?;
        info!(created = ids.len(), "Orders created");
        Ok(ids)
    }

    /// A user's orders, newest first, optionally narrowed to one status.
    #[instrument(skip(self))]
    pub async fn list_for_user(
        &self,
        user_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let query = Query::all()
            .filter(move |o: &Order| {
                o.user_id == user_id && status.map_or(true, |status| o.status == status)
            })
            .order_by(Order::newest_first);
        let page = self.inner.query(query).await.map_err(Self::map_error)?;
        Ok(page.items)
    }

    /// Admin listing across all users, newest first.
    #[instrument(skip(self))]
    pub async fn list_page(&self, request: PageRequest) -> Result<OrderPage, OrderError> {
        debug!("Sending request");
        let query = Query::all()
            .order_by(Order::newest_first)
            .skip(request.skip())
            .limit(request.limit);
        let page = self.inner.query(query).await.map_err(Self::map_error)?;
        Ok(OrderPage {
            orders: page.items,
            current_page: request.page,
            total_pages: request.total_pages(page.total),
            total: page.total,
        })
    }

    /// Sets `status` on exactly the listed orders. Unknown ids are skipped.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn update_status(&self, ids: Vec<OrderId>, status: OrderStatus) -> Result<usize, OrderError> {
        let ids: HashSet<OrderId> = ids.into_iter().collect();
        let updated = self
            .inner
            .update_where(move |o: &Order| ids.contains(&o.id), OrderUpdate { status })
            .await
            .map_err(Self::map_error)?;
        info!(updated, %status, "Order status updated");
        Ok(updated)
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn delete_many(&self, ids: Vec<OrderId>) -> Result<usize, OrderError> {
        let ids: HashSet<OrderId> = ids.into_iter().collect();
        let deleted = self
            .inner
            .delete_where(move |o: &Order| ids.contains(&o.id))
            .await
            .map_err(Self::map_error)?;
        info!(deleted, "Orders deleted");
        Ok(deleted)
    }

    /// Deletes one order. With an `owner`, only that user's order matches;
    /// without one, any order does. Nothing matched is [`OrderError::NotFound`].
    #[instrument(skip(self))]
    pub async fn delete_one(&self, id: OrderId, owner: Option<UserId>) -> Result<(), OrderError> {
        let deleted = self
            .inner
            .delete_where(move |o: &Order| o.id == id && owner.map_or(true, |owner| o.user_id == owner))
            .await
            .map_err(Self::map_error)?;
        if deleted == 0 {
            return Err(OrderError::NotFound(id.to_string()));
        }
        info!(%id, "Order deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_for_user(&self, user_id: UserId) -> Result<usize, OrderError> {
        let deleted = self
            .inner
            .delete_where(move |o: &Order| o.user_id == user_id)
            .await
            .map_err(Self::map_error)?;
        info!(deleted, "User orders deleted");
        Ok(deleted)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity(|e| match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })
    }
}
