mod client;
mod params;

pub use client::CatalogClient;
pub use params::ListParams;
