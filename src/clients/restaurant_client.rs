use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, Query, ResourceClient};
use crate::model::{MenuItem, Restaurant, RestaurantCreate, RestaurantFilter, RestaurantId, RestaurantUpdate};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, params: RestaurantCreate) -> Result<RestaurantId, RestaurantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Restaurants matching `filter`, by name.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: RestaurantFilter) -> Result<Vec<Restaurant>, RestaurantError> {
        debug!("Sending request");
        let query = Query::all()
            .filter(move |r: &Restaurant| filter.matches(r))
            .order_by(|a: &Restaurant, b: &Restaurant| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        let page = self.inner.query(query).await.map_err(Self::map_error)?;
        Ok(page.items)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// The restaurant's summarized menu; empty when it has none.
    #[instrument(skip(self))]
    pub async fn menu(&self, id: RestaurantId) -> Result<Vec<MenuItem>, RestaurantError> {
        self.get(id)
            .await?
            .map(|restaurant| restaurant.menu)
            .ok_or_else(|| RestaurantError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity(|e| match e {
            FrameworkError::NotFound(id) => RestaurantError::NotFound(id),
            other => RestaurantError::ActorCommunicationError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_restaurants() -> RestaurantClient {
        let (actor, client) = crate::restaurant_actor::new(8);
        tokio::spawn(actor.run(()));
        client
    }

    fn create(name: &str, location: &str) -> RestaurantCreate {
        RestaurantCreate {
            name: name.to_string(),
            location: location.to_string(),
            menu: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_filters() {
        let restaurants = spawn_restaurants();
        restaurants.create(create("Taquería Norte", "Monterrey")).await.unwrap();
        restaurants.create(create("Café Sur", "Oaxaca")).await.unwrap();

        let all = restaurants.list(RestaurantFilter::default()).await.unwrap();
        let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Café Sur", "Taquería Norte"]);

        let filtered = restaurants
            .list(RestaurantFilter {
                name: None,
                location: Some("MONTE".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Taquería Norte");
    }

    #[tokio::test]
    async fn test_update_and_menu() {
        let restaurants = spawn_restaurants();
        let id = restaurants.create(create("Café Sur", "Oaxaca")).await.unwrap();
        assert!(restaurants.menu(id).await.unwrap().is_empty());

        let menu = vec![MenuItem {
            name: "Mole".to_string(),
            price: 120.0,
        }];
        let updated = restaurants
            .update(
                id,
                RestaurantUpdate {
                    menu: Some(menu.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Café Sur");
        assert_eq!(restaurants.menu(id).await.unwrap(), menu);

        let missing = restaurants.menu(RestaurantId::new()).await;
        assert!(matches!(missing, Err(RestaurantError::NotFound(_))));

        let blank = restaurants
            .update(
                id,
                RestaurantUpdate {
                    name: Some(" ".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(blank, Err(RestaurantError::ValidationError(_))));
    }
}
