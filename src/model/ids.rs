//! Typed identifiers.
//!
//! Every entity gets its own UUID newtype, so an `OrderId` can never be passed
//! where a `UserId` is expected. Parsing a path or body id goes through
//! [`FromStr`]; a malformed id is a client error.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_ids {
    ($($entity:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Identifier of a `" $entity "`, backed by a random UUID."]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
                #[serde(transparent)]
                pub struct [<$entity Id>](pub Uuid);

                impl [<$entity Id>] {
                    pub fn new() -> Self {
                        Self(Uuid::new_v4())
                    }
                }

                impl Default for [<$entity Id>] {
                    fn default() -> Self {
                        Self::new()
                    }
                }

                impl Display for [<$entity Id>] {
                    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        Display::fmt(&self.0, f)
                    }
                }

                impl FromStr for [<$entity Id>] {
                    type Err = uuid::Error;

                    fn from_str(s: &str) -> Result<Self, Self::Err> {
                        Uuid::parse_str(s.trim()).map(Self)
                    }
                }
            )*
        }
    };
}

entity_ids!(User, Restaurant, Product, Order, Review);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_parse_and_display() {
        let id = OrderId::new();
        let parsed: OrderId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        assert!("not-an-id".parse::<UserId>().is_err());
        assert!("".parse::<ReviewId>().is_err());
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = RestaurantId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
