use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::client::ListParams;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::product::{Product, ProductList};

/// Number of products shown in the featured section.
pub(crate) const FEATURED_LIMIT: u32 = 8;

/// HTTP client for the remote product catalog.
///
/// Each call is a single independent request: no retries and no caching.
/// Failures of any kind come back as a [`CatalogError`] carrying a message
/// that can be shown directly.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Builds a client for the catalog described by `config`.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .default_headers(crate::build_headers())
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches a list of products.
    ///
    /// ```no_run
    /// use storefront::{CatalogClient, CatalogConfig, ListParams};
    ///
    /// #[tokio::main]
    /// async fn main() -> eyre::Result<()> {
    ///     let client = CatalogClient::new(&CatalogConfig::demo()?)?;
    ///     let list = client.fetch_list(&ListParams::default().limit(9)).await?;
    ///     println!("{} of {} products", list.products.len(), list.total);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self))]
    pub async fn fetch_list(&self, params: &ListParams) -> Result<ProductList, CatalogError> {
        let mut url = self.endpoint(&["products"])?;
        params.apply(&mut url);
        self.get_json(url).await
    }

    /// Fetches every product the service has.
    pub async fn fetch_all(&self) -> Result<ProductList, CatalogError> {
        self.fetch_list(&ListParams::default().limit(0)).await
    }

    /// Fetches the handful of products shown on the landing page.
    pub async fn fetch_featured(&self) -> Result<ProductList, CatalogError> {
        self.fetch_list(&ListParams::default().limit(FEATURED_LIMIT))
            .await
    }

    /// Fetches a single product by its identifier.
    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: u64) -> Result<Product, CatalogError> {
        if id == 0 {
            return Err(CatalogError::NotFound {
                message: format!("Product with id '{id}' not found"),
            });
        }
        let url = self.endpoint(&["products", id.to_string().as_str()])?;
        self.get_json(url).await
    }

    /// Fetches the products filed under `category`.
    #[instrument(skip(self))]
    pub async fn fetch_by_category(&self, category: &str) -> Result<ProductList, CatalogError> {
        let url = self.endpoint(&["products", "category", category])?;
        self.get_json(url).await
    }

    /// Runs a full-text search on the service side.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<ProductList, CatalogError> {
        let mut url = self.endpoint(&["products", "search"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_json(url).await
    }

    /// Appends escaped path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        debug!(%url, "requesting catalog");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(%url, %status, "catalog request failed");
            return Err(CatalogError::from_status(status, &body));
        }

        serde_json::from_str(&body).map_err(CatalogError::InvalidResponse)
    }
}
