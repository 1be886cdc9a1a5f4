//! Entity trait implementation for the Order domain type.
//!
//! New orders are stamped `pendiente` with the server time. The owning user is
//! checked in `on_create` through the [`UserClient`] injected as context.

use crate::clients::{ActorClient, UserClient};
use crate::framework::ActorEntity;
use crate::model::{DeliveryType, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = UserClient;
    type Error = OrderError;

    /// Builds the order and applies the delivery rule: a location is kept only
    /// for `domicilio`, where it is mandatory.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if !params.total.is_finite() || params.total < 0.0 {
            return Err(OrderError::ValidationError(format!("Total inválido: {}", params.total)));
        }
        let location = match params.delivery {
            DeliveryType::Domicilio => Some(params.location.ok_or_else(|| {
                OrderError::ValidationError(
                    "Los pedidos a domicilio requieren una ubicación".to_string(),
                )
            })?),
            DeliveryType::Recoger => None,
        };
        Ok(Self {
            id,
            user_id: params.user_id,
            items: params.items,
            total: params.total,
            delivery: params.delivery,
            location,
            status: OrderStatus::Pendiente,
            created_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, users: &UserClient) -> Result<(), OrderError> {
        debug!(user_id = %self.user_id, "Validating order owner");
        match users.get(self.user_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                warn!(user_id = %self.user_id, "Order for unknown user");
                Err(OrderError::InvalidUser(self.user_id.to_string()))
            }
            Err(e) => Err(OrderError::ActorCommunicationError(e.to_string())),
        }
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &UserClient) -> Result<(), OrderError> {
        self.status = update.status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinates, DeliveryLocation, UserId};

    fn params(delivery: DeliveryType, location: Option<DeliveryLocation>) -> OrderCreate {
        OrderCreate {
            user_id: UserId::new(),
            items: vec![],
            total: 10.0,
            delivery,
            location,
        }
    }

    fn somewhere() -> DeliveryLocation {
        DeliveryLocation {
            coordinates: Coordinates {
                latitud: 19.43,
                longitud: -99.13,
            },
            address: "Av. Juárez 10".to_string(),
        }
    }

    #[test]
    fn test_location_kept_only_for_domicilio() {
        let delivered =
            Order::from_create_params(OrderId::new(), params(DeliveryType::Domicilio, Some(somewhere())))
                .unwrap();
        assert_eq!(delivered.location, Some(somewhere()));
        assert_eq!(delivered.status, OrderStatus::Pendiente);

        let pickup =
            Order::from_create_params(OrderId::new(), params(DeliveryType::Recoger, Some(somewhere())))
                .unwrap();
        assert_eq!(pickup.location, None);
    }

    #[test]
    fn test_domicilio_without_location_rejected() {
        let result = Order::from_create_params(OrderId::new(), params(DeliveryType::Domicilio, None));
        assert!(matches!(result, Err(OrderError::ValidationError(_))));
    }
}
