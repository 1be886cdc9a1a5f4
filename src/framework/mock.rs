//! # Mock Framework
//!
//! Utilities for testing entities and clients in isolation.
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are answered
//! from a queue of expectations instead of a running [`ResourceActor`](super::ResourceActor).
//! This lets a test run, say, the real order actor while the user store it
//! depends on is scripted.

use crate::framework::{ActorEntity, FrameworkError, Page, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Query {
        items: Vec<T>,
    },
    DeleteWhere {
        response: Result<usize, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "Get",
            Expectation::Create { .. } => "Create",
            Expectation::Query { .. } => "Query",
            Expectation::DeleteWhere { .. } => "DeleteWhere",
        }
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation makes the background task panic, which the caller observes as
/// [`FrameworkError::ActorDropped`].
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<User>::new();
/// mock.expect_get(user_id).return_ok(Some(user));
///
/// let client = UserClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "Get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Query { query, respond_to }, Some(Expectation::Query { items })) => {
                        let page: Page<T> = query.run(items.iter());
                        let _ = respond_to.send(Ok(page));
                    }
                    (ResourceRequest::DeleteWhere { respond_to, .. }, Some(Expectation::DeleteWhere { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        panic!(
                            "Unexpected request {:?}, expected {}",
                            request,
                            expectation.as_ref().map_or("nothing", Expectation::name)
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query`; the query runs for real against `items`.
    pub fn expect_query(&mut self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query { items });
    }

    /// Expects a `delete_where` reporting `deleted` removals.
    pub fn expect_delete_where(&mut self, deleted: usize) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::DeleteWhere { response: Ok(deleted) });
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Err(error) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ActorClient, UserClient};
    use crate::model::{Role, User, UserCreate, UserId};

    fn sample_user(id: UserId) -> User {
        User {
            id,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            password_hash: String::new(),
            phone: None,
            role: Role::Cliente,
        }
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let id = UserId::new();
        let mut mock = MockClient::<User>::new();
        mock.expect_create().return_ok(id);
        mock.expect_get(id).return_ok(Some(sample_user(id)));

        let client = mock.client();

        let created = client
            .create(UserCreate {
                name: "Test".to_string(),
                email: "test@example.com".to_string(),
                password_hash: String::new(),
                phone: None,
                role: Role::Cliente,
            })
            .await
            .unwrap();
        assert_eq!(created, id);

        let fetched = client.get(id).await.unwrap();
        assert_eq!(fetched.unwrap().email, "test@example.com");

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_query_applies_filter() {
        let alice = UserId::new();
        let mut mock = MockClient::<User>::new();
        let mut other = sample_user(UserId::new());
        other.email = "other@example.com".to_string();
        mock.expect_query(vec![sample_user(alice), other]);

        let users = UserClient::new(mock.client());
        let found = users.find_by_email("TEST@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(alice));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_get_error_is_mapped() {
        let id = UserId::new();
        let mut mock = MockClient::<User>::new();
        mock.expect_get(id).return_err(FrameworkError::ActorClosed);

        let users = UserClient::new(mock.client());
        assert!(users.get(id).await.is_err());

        mock.verify();
    }
}
