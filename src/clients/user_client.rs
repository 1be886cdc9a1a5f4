use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, Query, ResourceClient};
use crate::model::{normalize_email, Registration, User, UserCreate, UserId};
use crate::user_actor::UserError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the User actor.
///
/// Password hashing and verification run on the blocking pool, never inside
/// the actor, so a slow hash cannot stall other user requests.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Registers a new account. Fails with [`UserError::AlreadyExists`] when
    /// the email is taken.
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: Registration) -> Result<UserId, UserError> {
        if registration.email.trim().is_empty() || registration.password.is_empty() {
            return Err(UserError::ValidationError(
                "Email y contraseña son requeridos".to_string(),
            ));
        }
        let password_hash = hash_password(registration.password).await?;
        let id = self
            .inner
            .create(UserCreate {
                name: registration.name,
                email: registration.email,
                password_hash,
                phone: registration.phone,
                role: registration.role,
            })
            .await
            .map_err(Self::map_error)?;
        info!(%id, "User registered");
        Ok(id)
    }

    /// Case-insensitive lookup by email.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let email = normalize_email(email);
        let page = self
            .inner
            .query(Query::all().filter(move |u: &User| u.email == email).limit(1))
            .await
            .map_err(Self::map_error)?;
        Ok(page.items.into_iter().next())
    }

    /// Checks a login. Unknown email is [`UserError::NotFound`], a wrong
    /// password [`UserError::InvalidPassword`].
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: String) -> Result<User, UserError> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;
        if !verify_password(password, user.password_hash.clone()).await? {
            warn!(user_id = %user.id, "Wrong password");
            return Err(UserError::InvalidPassword);
        }
        info!(user_id = %user.id, "Login");
        Ok(user)
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity(|e| match e {
            FrameworkError::Conflict(email) => UserError::AlreadyExists(email),
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => UserError::ActorCommunicationError(other.to_string()),
        })
    }
}

async fn hash_password(password: String) -> Result<String, UserError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::HashingError(e.to_string()))
    })
    .await
    .map_err(|e| UserError::HashingError(e.to_string()))?
}

async fn verify_password(password: String, hash: String) -> Result<bool, UserError> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash).map_err(|e| UserError::HashingError(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    })
    .await
    .map_err(|e| UserError::HashingError(e.to_string()))?
}
