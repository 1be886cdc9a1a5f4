use crate::model::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role. Registration defaults to [`Role::Cliente`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Cliente,
}

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// The password is only ever held as an Argon2 PHC string. Users are created at
/// registration and read at login; there is no update path.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Lower-cased and trimmed; unique across the store.
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub role: Role,
}

impl User {
    /// Name shown next to the user's reviews: the user's name, or the local
    /// part of the email when no name was given.
    pub fn display_name(&self) -> String {
        let name = self.name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
        self.email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Payload for creating a new user. The password is already hashed.
#[derive(Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub role: Role,
}

impl fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreate")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Registration form as submitted by the client.
#[derive(Clone, Default, Deserialize)]
pub struct Registration {
    #[serde(default, rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "contraseña")]
    pub password: String,
    #[serde(default, rename = "telefono")]
    pub phone: Option<String>,
    #[serde(default, rename = "tipo")]
    pub role: Role,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Login form.
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "contraseña")]
    pub password: String,
}

/// Public view of a user returned by login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub id: UserId,
    pub email: String,
    #[serde(rename = "tipo")]
    pub role: Role,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Normalizes an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str) -> User {
        User {
            id: UserId::new(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "secret-hash".to_string(),
            phone: None,
            role: Role::Cliente,
        }
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(user("Ana", "ana@example.com").display_name(), "Ana");
        assert_eq!(user("  ", "luis@example.com").display_name(), "luis");
    }

    #[test]
    fn test_debug_hides_password_hash() {
        let rendered = format!("{:?}", user("Ana", "ana@example.com"));
        assert!(!rendered.contains("secret-hash"));
    }

    #[test]
    fn test_registration_defaults_to_cliente() {
        let form: Registration =
            serde_json::from_str(r#"{"nombre":"Ana","email":"a@b.c","contraseña":"x"}"#).unwrap();
        assert_eq!(form.role, Role::Cliente);
        assert_eq!(form.password, "x");
    }
}
