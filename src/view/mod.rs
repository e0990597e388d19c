//! View state for the storefront pages.
//!
//! Everything here is synchronous and free of I/O except the `load`
//! helpers, which await a single [`CatalogClient`](crate::CatalogClient)
//! call and feed the outcome through a [`Loadable`].

mod derive;
mod detail;
mod featured;
mod loadable;
mod pagination;
mod products;

pub use derive::{categories, filter_products};
pub use detail::ProductDetailPage;
pub use featured::FeaturedSection;
pub use loadable::{LoadState, Loadable, RequestTicket};
pub use pagination::{PageMarker, Pagination, DEFAULT_MAX_VISIBLE_PAGES};
pub use products::{results_headline, ProductsPage, ProductsView, PRODUCTS_PER_PAGE};
