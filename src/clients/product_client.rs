use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, Query, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductSort, ProductView};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Loads a batch of products; nothing is stored if any of them is invalid.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn create_many(&self, products: Vec<ProductCreate>) -> Result<Vec<ProductId>, ProductError> {
        debug!("Sending request");
        self.inner.create_many(products).await.map_err(Self::map_error)
    }

    /// Public listing: optional exact category match, sorted by price.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        category: Option<String>,
        sort: ProductSort,
    ) -> Result<Vec<ProductView>, ProductError> {
        debug!("Sending request");
        let mut query = Query::all().order_by(move |a: &Product, b: &Product| {
            sort.compare(a, b).then_with(|| a.name.cmp(&b.name))
        });
        if let Some(category) = category {
            query = query.filter(move |p: &Product| p.category == category);
        }
        let page = self.inner.query(query).await.map_err(Self::map_error)?;
        Ok(page.items.into_iter().map(ProductView::from).collect())
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity(|e| ProductError::ActorCommunicationError(e.to_string()))
    }
}
