use crate::model::RestaurantId;
use serde::{Deserialize, Serialize};

/// One entry of a restaurant's summarized menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio", default)]
    pub price: f64,
}

/// A restaurant and its summarized menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Restaurant`](#impl-ActorEntity-for-Restaurant) for details on:
/// - Creation parameters ([`RestaurantCreate`])
/// - Update parameters ([`RestaurantUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: RestaurantId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "menu_resumido")]
    pub menu: Vec<MenuItem>,
}

/// Payload for creating a new restaurant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantCreate {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "ubicacion", default)]
    pub location: String,
    #[serde(rename = "menu_resumido", default)]
    pub menu: Vec<MenuItem>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantUpdate {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "ubicacion")]
    pub location: Option<String>,
    #[serde(rename = "menu_resumido")]
    pub menu: Option<Vec<MenuItem>>,
}

/// Case-insensitive substring filters for restaurant listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantFilter {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "ubicacion")]
    pub location: Option<String>,
}

impl RestaurantFilter {
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        fn contains(haystack: &str, needle: &Option<String>) -> bool {
            needle
                .as_deref()
                .map_or(true, |needle| haystack.to_lowercase().contains(&needle.to_lowercase()))
        }
        contains(&restaurant.name, &self.name) && contains(&restaurant.location, &self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let restaurant = Restaurant {
            id: RestaurantId::new(),
            name: "La Parrilla".to_string(),
            location: "Centro Histórico".to_string(),
            menu: vec![],
        };

        let by_name = RestaurantFilter {
            name: Some("parri".to_string()),
            location: None,
        };
        assert!(by_name.matches(&restaurant));

        let wrong_place = RestaurantFilter {
            name: Some("parri".to_string()),
            location: Some("norte".to_string()),
        };
        assert!(!wrong_place.matches(&restaurant));
        assert!(RestaurantFilter::default().matches(&restaurant));
    }
}
