use crate::product::Product;
use crate::view::{LoadState, Loadable};
use crate::CatalogClient;

/// State of a single product's detail page.
#[derive(Debug, Clone)]
pub struct ProductDetailPage {
    id: u64,
    product: Loadable<Product>,
    selected_image: usize,
    quantity: u32,
}

impl ProductDetailPage {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            product: Loadable::new(),
            selected_image: 0,
            quantity: 1,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> &LoadState<Product> {
        self.product.state()
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.ready()
    }

    pub async fn load(&mut self, client: &CatalogClient) -> bool {
        let ticket = self.product.begin();
        let result = client.fetch_by_id(self.id).await;
        let applied = self.product.complete(ticket, result);
        if applied {
            self.selected_image = 0;
        }
        applied
    }

    /// URL of the image in the main viewer.
    pub fn selected_image(&self) -> Option<&str> {
        self.product()?
            .images
            .get(self.selected_image)
            .map(String::as_str)
    }

    /// Shows image `index`; out-of-range indexes are ignored.
    pub fn select_image(&mut self, index: usize) -> bool {
        let in_range = self
            .product()
            .is_some_and(|product| index < product.images.len());
        if in_range {
            self.selected_image = index;
        }
        in_range
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Never drops below one.
    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn can_add_to_cart(&self) -> bool {
        self.product().is_some_and(Product::in_stock)
    }
}
