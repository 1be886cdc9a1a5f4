//! Entity trait implementation for the Restaurant domain type.

use crate::framework::ActorEntity;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;

fn required_name(name: &str) -> Result<String, RestaurantError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RestaurantError::ValidationError(
            "El nombre del restaurante es requerido".to_string(),
        ));
    }
    Ok(name.to_string())
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Context = ();
    type Error = RestaurantError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, RestaurantError> {
        Ok(Self {
            id,
            name: required_name(&params.name)?,
            location: params.location.trim().to_string(),
            menu: params.menu,
        })
    }

    /// Applies a partial update.
    ///
    /// # Fields Updated
    /// - `name`: must stay non-blank
    /// - `location`
    /// - `menu`: replaced as a whole
    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), RestaurantError> {
        if let Some(name) = update.name {
            self.name = required_name(&name)?;
        }
        if let Some(location) = update.location {
            self.location = location.trim().to_string();
        }
        if let Some(menu) = update.menu {
            self.menu = menu;
        }
        Ok(())
    }
}
