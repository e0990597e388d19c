use crate::product::Product;
use crate::view::{LoadState, Loadable};
use crate::CatalogClient;

/// The handful of products highlighted on the landing page.
#[derive(Debug, Clone, Default)]
pub struct FeaturedSection {
    products: Loadable<Vec<Product>>,
}

impl FeaturedSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Vec<Product>> {
        self.products.state()
    }

    /// Loaded products, empty until a load succeeds.
    pub fn products(&self) -> &[Product] {
        self.products.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Loaded successfully but the service returned no products.
    pub fn is_empty(&self) -> bool {
        self.products.ready().is_some_and(Vec::is_empty)
    }

    pub async fn load(&mut self, client: &CatalogClient) -> bool {
        let ticket = self.products.begin();
        let result = client.fetch_featured().await;
        self.products
            .complete(ticket, result.map(|list| list.products))
    }
}
