//! Entity trait implementation for the User domain type.
//!
//! Emails are normalized on creation and double as the store's unique key, so
//! two registrations racing for the same address cannot both succeed.

use crate::framework::ActorEntity;
use crate::model::{normalize_email, User, UserCreate, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        let email = normalize_email(&params.email);
        if email.is_empty() {
            return Err(UserError::ValidationError("El email es requerido".to_string()));
        }
        if params.password_hash.is_empty() {
            return Err(UserError::ValidationError("La contraseña es requerida".to_string()));
        }
        Ok(Self {
            id,
            name: params.name.trim().to_string(),
            email,
            password_hash: params.password_hash,
            phone: params.phone,
            role: params.role,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.email.clone())
    }

    /// Users are never updated in-app.
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}
