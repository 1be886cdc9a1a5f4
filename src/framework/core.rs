//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the storage layer.
//! Every resource (users, restaurants, products, orders, reviews) lives inside
//! its own [`ResourceActor`], which owns an in-memory keyed store and processes
//! requests one at a time.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all resource types must implement.
//! - [`ResourceActor`]: The generic actor that manages entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`Query`] / [`Page`]: Filtered, ordered and paginated reads.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound, Conflict).

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and DTOs)
// =============================================================================

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our resource types must
/// satisfy, we write the `ResourceActor` logic *once* and reuse it for every
/// store. Associated types keep payloads apart: an `Order` store only accepts
/// `OrderCreate`, never a `ReviewCreate`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` type
/// is injected into every hook when the actor starts running ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    ///
    /// Must be `Clone` so one update can be applied to many entities.
    type Update: Clone + Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Key that must be unique across the store (e.g. an email address).
    ///
    /// The actor rejects a create whose key is already taken with
    /// [`FrameworkError::Conflict`].
    fn unique_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// Use this hook to perform validation or side effects (e.g., checking other actors).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Unique key already taken: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    fn entity<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
        FrameworkError::EntityError(Box::new(e))
    }

    /// Recovers the typed error an entity hook returned. Anything else,
    /// including entity errors of another type, is passed to `other`.
    pub fn downcast_entity<E>(self, other: impl FnOnce(FrameworkError) -> E) -> E
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => *e,
                Err(inner) => other(FrameworkError::EntityError(inner)),
            },
            e => other(e),
        }
    }
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Predicate selecting entities inside the actor.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Ordering applied to query results inside the actor.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A read over one store: optional filter, optional ordering, then skip/limit.
///
/// The whole query runs inside the actor, so pagination never ships the full
/// store back to the caller.
pub struct Query<T> {
    filter: Option<Filter<T>>,
    order: Option<Comparator<T>>,
    skip: usize,
    limit: Option<usize>,
}

impl<T> Query<T> {
    /// Matches every entity, unordered.
    pub fn all() -> Self {
        Self {
            filter: None,
            order: None,
            skip: 0,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn order_by(mut self, order: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.order = Some(Box::new(order));
        self
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, item: &T) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(item))
    }

    /// Evaluates the query against a set of entities.
    ///
    /// `total` counts every match before skip/limit are applied.
    pub fn run<'a, I>(self, items: I) -> Page<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: Clone + 'a,
    {
        let mut matched: Vec<T> = items
            .into_iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect();
        let total = matched.len();
        if let Some(order) = &self.order {
            matched.sort_by(|a, b| order(a, b));
        }
        let items = matched
            .into_iter()
            .skip(self.skip)
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();
        Page { items, total }
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T> Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filtered", &self.filter.is_some())
            .field("ordered", &self.order.is_some())
            .field("skip", &self.skip)
            .field("limit", &self.limit)
            .finish()
    }
}

/// Result of a [`Query`].
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the lifecycle of a stored resource: single and batch
/// creation, reads by id or by [`Query`], updates of one entity or of every
/// entity matching a filter, and deletion of every entity matching a filter.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    CreateMany {
        params: Vec<T::Create>,
        respond_to: Response<Vec<T::Id>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Query {
        query: Query<T>,
        respond_to: Response<Page<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    UpdateWhere {
        filter: Filter<T>,
        update: T::Update,
        respond_to: Response<usize>,
    },
    DeleteWhere {
        filter: Filter<T>,
        respond_to: Response<usize>,
    },
}

impl<T: ActorEntity> Debug for ResourceRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRequest::Create { params, .. } => {
                f.debug_struct("Create").field("params", params).finish()
            }
            ResourceRequest::CreateMany { params, .. } => {
                f.debug_struct("CreateMany").field("params", params).finish()
            }
            ResourceRequest::Get { id, .. } => f.debug_struct("Get").field("id", id).finish(),
            ResourceRequest::Query { query, .. } => {
                f.debug_struct("Query").field("query", query).finish()
            }
            ResourceRequest::Update { id, update, .. } => f
                .debug_struct("Update")
                .field("id", id)
                .field("update", update)
                .finish(),
            ResourceRequest::UpdateWhere { update, .. } => f
                .debug_struct("UpdateWhere")
                .field("update", update)
                .finish(),
            ResourceRequest::DeleteWhere { .. } => f.debug_struct("DeleteWhere").finish(),
        }
    }
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially*, so the `store` needs
/// no `Mutex`. Check-then-insert flows such as unique keys and all-or-nothing
/// batches are therefore atomic with respect to the store.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; callers wait when it is full.
    /// * `next_id_fn` - generator for the ids of newly created entities.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "restaurant_orders::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();
                    let result = match Self::stage(id.clone(), params, &context).await {
                        Ok(item) => match self.claim_key(&item, &mut HashSet::new()) {
                            Ok(()) => {
                                self.store.insert(id.clone(), item);
                                info!(entity_type, %id, size = self.store.len(), "Created");
                                Ok(id)
                            }
                            Err(e) => Err(e),
                        },
                        Err(e) => Err(e),
                    };
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::CreateMany { params, respond_to } => {
                    debug!(entity_type, count = params.len(), "CreateMany");
                    let result = self.create_many(params, &context).await;
                    match &result {
                        Ok(ids) => {
                            info!(entity_type, created = ids.len(), size = self.store.len(), "Created batch")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Batch create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Query { query, respond_to } => {
                    debug!(entity_type, ?query, "Query");
                    let page = query.run(self.store.values());
                    debug!(entity_type, total = page.total, returned = page.items.len(), "Query done");
                    let _ = respond_to.send(Ok(page));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Await the async hook
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::UpdateWhere {
                    filter,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, ?update, "UpdateWhere");
                    let result = self.update_where(&filter, update, &context).await;
                    match &result {
                        Ok(updated) => info!(entity_type, updated, "Updated batch"),
                        Err(e) => warn!(entity_type, error = %e, "Batch update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::DeleteWhere { filter, respond_to } => {
                    debug!(entity_type, "DeleteWhere");
                    let result = self.delete_where(&filter, &context).await;
                    match &result {
                        Ok(deleted) => {
                            info!(entity_type, deleted, size = self.store.len(), "Deleted")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Builds an entity and runs its `on_create` hook without touching the store.
    async fn stage(id: T::Id, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        let mut item = T::from_create_params(id, params).map_err(FrameworkError::entity)?;
        item.on_create(context).await.map_err(FrameworkError::entity)?;
        Ok(item)
    }

    /// Rejects `item` if its unique key is held by a stored entity or by an
    /// entity staged earlier in the same batch (`pending`).
    fn claim_key(&self, item: &T, pending: &mut HashSet<String>) -> Result<(), FrameworkError> {
        let Some(key) = item.unique_key() else {
            return Ok(());
        };
        let stored = self
            .store
            .values()
            .any(|existing| existing.unique_key().as_deref() == Some(key.as_str()));
        if stored || !pending.insert(key.clone()) {
            return Err(FrameworkError::Conflict(key));
        }
        Ok(())
    }

    /// All-or-nothing: every entity is staged first and the store is only
    /// touched once the whole batch succeeded.
    async fn create_many(
        &mut self,
        params: Vec<T::Create>,
        context: &T::Context,
    ) -> Result<Vec<T::Id>, FrameworkError> {
        let mut staged = Vec::with_capacity(params.len());
        let mut pending = HashSet::new();
        for params in params {
            let id = (self.next_id_fn)();
            let item = Self::stage(id.clone(), params, context).await?;
            self.claim_key(&item, &mut pending)?;
            staged.push((id, item));
        }

        let ids = staged.iter().map(|(id, _)| id.clone()).collect();
        self.store.extend(staged);
        Ok(ids)
    }

    async fn update_where(
        &mut self,
        filter: &Filter<T>,
        update: T::Update,
        context: &T::Context,
    ) -> Result<usize, FrameworkError> {
        let ids: Vec<T::Id> = self
            .store
            .iter()
            .filter(|(_, item)| filter(item))
            .map(|(id, _)| id.clone())
            .collect();

        let mut updated = 0;
        for id in ids {
            if let Some(item) = self.store.get_mut(&id) {
                item.on_update(update.clone(), context)
                    .await
                    .map_err(FrameworkError::entity)?;
                updated += 1;
            }
        }
        Ok(updated)
    }

    /// Runs every `on_delete` hook before removing anything, so a failing hook
    /// leaves the store untouched.
    async fn delete_where(
        &mut self,
        filter: &Filter<T>,
        context: &T::Context,
    ) -> Result<usize, FrameworkError> {
        let ids: Vec<T::Id> = self
            .store
            .iter()
            .filter(|(_, item)| filter(item))
            .map(|(id, _)| id.clone())
            .collect();

        for id in &ids {
            if let Some(item) = self.store.get(id) {
                item.on_delete(context).await.map_err(FrameworkError::entity)?;
            }
        }
        for id in &ids {
            self.store.remove(id);
        }
        Ok(ids.len())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so cloning is cheap and clones can be shared across tasks.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn create_many(&self, params: Vec<T::Create>) -> Result<Vec<T::Id>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::CreateMany { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn query(&self, query: Query<T>) -> Result<Page<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Query { query, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn update_where(
        &self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
        update: T::Update,
    ) -> Result<usize, FrameworkError> {
        self.call(|respond_to| ResourceRequest::UpdateWhere {
            filter: Box::new(filter),
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete_where(
        &self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<usize, FrameworkError> {
        self.call(|respond_to| ResourceRequest::DeleteWhere {
            filter: Box::new(filter),
            respond_to,
        })
        .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct SimpleUser {
        id: String,
        name: String,
        email: String,
        score: u32,
    }

    #[derive(Debug)]
    struct SimpleUserCreate {
        name: String,
        email: String,
        score: u32,
    }

    #[derive(Debug, Clone)]
    struct SimpleUserUpdate {
        score: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("invalid user: {0}")]
    struct SimpleUserError(String);

    #[async_trait]
    impl ActorEntity for SimpleUser {
        type Id = String;
        type Create = SimpleUserCreate;
        type Update = SimpleUserUpdate;
        type Context = ();
        type Error = SimpleUserError;

        fn from_create_params(id: String, params: SimpleUserCreate) -> Result<Self, Self::Error> {
            if params.name.is_empty() {
                return Err(SimpleUserError("empty name".into()));
            }
            Ok(Self {
                id,
                name: params.name,
                email: params.email,
                score: params.score,
            })
        }

        fn unique_key(&self) -> Option<String> {
            Some(self.email.clone())
        }

        async fn on_update(&mut self, update: SimpleUserUpdate, _ctx: &()) -> Result<(), Self::Error> {
            self.score = update.score;
            Ok(())
        }
    }

    fn spawn_users() -> ResourceClient<SimpleUser> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("user_{}", counter.fetch_add(1, AtomicOrdering::SeqCst));
        let (actor, client) = ResourceActor::<SimpleUser>::new(10, next_id);
        tokio::spawn(actor.run(()));
        client
    }

    fn params(name: &str, score: u32) -> SimpleUserCreate {
        SimpleUserCreate {
            name: name.into(),
            email: format!("{name}@example.com"),
            score,
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_create_get_update() {
        let client = spawn_users();

        let id = client.create(params("alice", 1)).await.unwrap();
        let user = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(user.name, "alice");

        let updated = client
            .update(id.clone(), SimpleUserUpdate { score: 7 })
            .await
            .unwrap();
        assert_eq!(updated.score, 7);

        let missing = client.update("user_99".into(), SimpleUserUpdate { score: 1 }).await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unique_key_conflict() {
        let client = spawn_users();

        client.create(params("alice", 1)).await.unwrap();
        let duplicate = client.create(params("alice", 2)).await;
        assert!(matches!(duplicate, Err(FrameworkError::Conflict(key)) if key == "alice@example.com"));

        let page = client.query(Query::all()).await.unwrap();
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_create_many_is_all_or_nothing() {
        let client = spawn_users();

        let ids = client
            .create_many(vec![params("a", 1), params("b", 2)])
            .await
            .unwrap();
        assert_eq!(ids.len(), 2);

        let failed = client
            .create_many(vec![params("c", 3), params("", 4)])
            .await;
        let typed = failed.unwrap_err().downcast_entity(|e| SimpleUserError(e.to_string()));
        assert_eq!(typed.to_string(), "invalid user: empty name");

        let same_batch_dup = client
            .create_many(vec![params("d", 1), params("d", 2)])
            .await;
        assert!(matches!(same_batch_dup, Err(FrameworkError::Conflict(_))));

        let page = client.query(Query::all()).await.unwrap();
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn test_query_filter_order_and_paging() {
        let client = spawn_users();
        for score in 1..=10 {
            client.create(params(&format!("u{score}"), score)).await.unwrap();
        }

        let page = client
            .query(
                Query::all()
                    .filter(|u: &SimpleUser| u.score % 2 == 0)
                    .order_by(|a: &SimpleUser, b: &SimpleUser| b.score.cmp(&a.score))
                    .skip(1)
                    .limit(2),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 5);
        let scores: Vec<u32> = page.items.iter().map(|u| u.score).collect();
        assert_eq!(scores, vec![8, 6]);
    }

    #[tokio::test]
    async fn test_update_where_and_delete_where() {
        let client = spawn_users();
        for score in 1..=4 {
            client.create(params(&format!("u{score}"), score)).await.unwrap();
        }

        let updated = client
            .update_where(|u: &SimpleUser| u.score <= 2, SimpleUserUpdate { score: 100 })
            .await
            .unwrap();
        assert_eq!(updated, 2);

        let deleted = client
            .delete_where(|u: &SimpleUser| u.score == 100)
            .await
            .unwrap();
        assert_eq!(deleted, 2);

        let none = client.delete_where(|u: &SimpleUser| u.score == 100).await.unwrap();
        assert_eq!(none, 0);

        let remaining = client.query(Query::all()).await.unwrap();
        let mut scores: Vec<u32> = remaining.items.iter().map(|u| u.score).collect();
        scores.sort();
        assert_eq!(scores, vec![3, 4]);
    }
}
