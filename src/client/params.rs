use url::Url;

/// Query parameters accepted by the product list endpoint.
///
/// Unset fields are left out of the query string entirely.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Maximum number of products to return. `0` asks for all of them.
    pub limit: Option<u32>,
    /// Number of products to skip from the start.
    pub skip: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ListParams {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Appends the set parameters to `url`'s query string.
    pub(crate) fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
        if let Some(skip) = self.skip {
            pairs.append_pair("skip", &skip.to_string());
        }
        if let Some(search) = &self.search {
            pairs.append_pair("search", search);
        }
        if let Some(category) = &self.category {
            pairs.append_pair("category", category);
        }
        drop(pairs);
        if url.query() == Some("") {
            url.set_query(None);
        }
    }
}
