use serde::Deserialize;

use crate::product::{Dimensions, Review};

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
/// A product as listed by the catalog service.
///
/// Use [`CatalogClient::fetch_by_id`](crate::CatalogClient::fetch_by_id) to
/// fetch a single product, or one of the list operations to fetch many.
/// Fields the service leaves out decode to their defaults.
pub struct Product {
    /// Catalog identifier.
    pub id: u64,
    /// Product name.
    pub title: String,
    pub description: String,
    /// List price, before discount.
    pub price: f64,
    /// Discount in percent, e.g. `12.5`.
    pub discount_percentage: f64,
    /// Average rating of the product.
    pub rating: f64,
    /// Units left in stock.
    pub stock: u32,
    /// Category label, such as `beauty` or `smartphones`.
    pub category: String,
    /// Brand name. Empty for unbranded goods.
    pub brand: String,
    /// URL to the thumbnail of the product.
    pub thumbnail: String,
    /// URLs to the full-size images of the product.
    pub images: Vec<String>,
    /// Free-form availability, like `In Stock` or `Low Stock`.
    pub availability_status: String,
    pub warranty_information: String,
    pub shipping_information: String,
    pub return_policy: String,
    pub dimensions: Dimensions,
    /// Reviews in the order the service returned them.
    pub reviews: Vec<Review>,
}

impl Product {
    /// Price after applying the discount.
    pub fn final_price(&self) -> f64 {
        self.price - self.price * self.discount_percentage / 100.0
    }

    /// Amount saved against the list price.
    pub fn savings(&self) -> f64 {
        self.price - self.final_price()
    }

    /// Whether at least one unit is left.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
/// A page of products together with the service's own paging counters.
///
/// `total`, `skip` and `limit` describe the service-side query only.
/// Client-side filtering and pagination never read them.
pub struct ProductList {
    pub products: Vec<Product>,
    /// Number of products matching the query on the service.
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}
