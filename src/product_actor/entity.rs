//! Entity trait implementation for the Product domain type.

use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ();
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(ProductError::ValidationError("Nombre vacío".to_string()));
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(ProductError::ValidationError(format!(
                "{name}: precio {}",
                params.price
            )));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            description: params.description,
            price: params.price,
            ingredients: params.ingredients,
            category: params.category.trim().to_string(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), ProductError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_price_rejected() {
        let result = Product::from_create_params(
            ProductId::new(),
            ProductCreate {
                name: "Agua".to_string(),
                price: -1.0,
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(ProductError::ValidationError(_))));
    }
}
