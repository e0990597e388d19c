//! Browse a remote product catalog.
//!
//! `CatalogClient` fetches products from the catalog service, while the
//! `view` module turns the fetched list plus user input (category, search
//! box, page buttons) into what a storefront shows. `DebouncedSearch`
//! rate-limits the search box so filtering follows settled input only.
//!
//! Feature Flags:
//! - `serde_io`: Derives `Serialize` for the product model. (default)

mod client;
mod config;
mod error;
mod product;
mod search;
pub mod view;

pub use client::{CatalogClient, ListParams};
pub use config::CatalogConfig;
pub use error::{CatalogError, ConfigError};
use header::{HeaderMap, HeaderValue};
pub use product::{Dimensions, Product, ProductList, Review};
use reqwest::header;
pub use search::{DebouncedSearch, ScheduledCommit, DEFAULT_DEBOUNCE};
pub use url::Url;

/// Builds the default headers for the client.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!("storefront/", env!("CARGO_PKG_VERSION"))),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers
}
