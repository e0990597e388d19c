use std::time::Duration;

use tracing::debug;

use crate::error::CatalogError;
use crate::product::{Product, ProductList};
use crate::search::{DebouncedSearch, ScheduledCommit};
use crate::view::{
    categories, filter_products, LoadState, Loadable, Pagination, RequestTicket,
    DEFAULT_MAX_VISIBLE_PAGES,
};
use crate::CatalogClient;

/// Products shown per page of the catalog listing.
pub const PRODUCTS_PER_PAGE: usize = 9;

/// State of the catalog listing page.
///
/// The whole catalog is fetched once and every category filter, search and
/// page change is applied locally. Whenever the filtered set can change
/// (new category, new committed search term, fresh data) the listing goes
/// back to page 1.
#[derive(Debug, Clone)]
pub struct ProductsPage {
    catalog: Loadable<Vec<Product>>,
    selected_category: Option<String>,
    search: DebouncedSearch,
    current_page: usize,
    items_per_page: usize,
    max_visible_pages: usize,
}

/// What the listing shows for the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsView<'a> {
    /// Every category present in the loaded catalog, sorted.
    pub categories: Vec<String>,
    /// Products passing the category and search filters.
    pub filtered: Vec<&'a Product>,
    /// The part of `filtered` on the current page.
    pub visible: Vec<&'a Product>,
    pub pagination: Pagination,
    /// Result count summary, present only while a filter is active.
    pub headline: Option<String>,
}

impl Default for ProductsPage {
    fn default() -> Self {
        Self::new(DebouncedSearch::default())
    }
}

impl ProductsPage {
    pub fn new(search: DebouncedSearch) -> Self {
        Self {
            catalog: Loadable::new(),
            selected_category: None,
            search,
            current_page: 1,
            items_per_page: PRODUCTS_PER_PAGE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
        }
    }

    pub fn state(&self) -> &LoadState<Vec<Product>> {
        self.catalog.state()
    }

    pub fn search(&self) -> &DebouncedSearch {
        &self.search
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Current page, always within the pages of the filtered listing.
    pub fn current_page(&self) -> usize {
        self.pagination(self.filtered().len()).current_page()
    }

    /// Whether a category or a committed search term narrows the listing.
    pub fn has_active_filters(&self) -> bool {
        self.selected_category.is_some() || !self.search.committed_term().is_empty()
    }

    /// Fetches the full catalog and applies the response.
    pub async fn load(&mut self, client: &CatalogClient) -> bool {
        let ticket = self.begin_load();
        let result = client.fetch_all().await;
        self.finish_load(ticket, result)
    }

    /// Marks the catalog as loading and returns the ticket of the request.
    pub fn begin_load(&mut self) -> RequestTicket {
        self.current_page = 1;
        self.catalog.begin()
    }

    /// Applies a catalog response. Responses to superseded requests are
    /// discarded and `false` is returned.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<ProductList, CatalogError>,
    ) -> bool {
        let applied = self
            .catalog
            .complete(ticket, result.map(|list| list.products));
        if applied {
            self.current_page = 1;
        }
        applied
    }

    /// Selects a category, or all categories with `None` or an empty name.
    pub fn select_category(&mut self, category: Option<String>) {
        let category = category.filter(|category| !category.is_empty());
        if self.selected_category != category {
            debug!(?category, "category selected");
            self.selected_category = category;
            self.current_page = 1;
        }
    }

    /// Forwards a keystroke in the search box.
    pub fn search_input(&mut self, text: impl Into<String>, now: Duration) -> ScheduledCommit {
        self.search.on_input(text, now)
    }

    /// Lets a due search commit fire. Returns `true` if the committed term changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let previous = self.search.committed_term().to_string();
        let changed = self
            .search
            .advance(now)
            .is_some_and(|term| term != previous);
        if changed {
            self.current_page = 1;
        }
        changed
    }

    /// Fires the search timer for `generation`. Returns `true` if the
    /// committed term changed.
    pub fn on_search_timer(&mut self, generation: u64) -> bool {
        let previous = self.search.committed_term().to_string();
        let changed = self
            .search
            .on_timer_fire(generation)
            .is_some_and(|term| term != previous);
        if changed {
            self.current_page = 1;
        }
        changed
    }

    pub fn clear_search(&mut self) {
        let had_term = !self.search.committed_term().is_empty();
        self.search.on_clear();
        if had_term {
            self.current_page = 1;
        }
    }

    /// Drops both the search term and the category filter.
    pub fn clear_filters(&mut self) {
        self.clear_search();
        self.select_category(None);
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.navigate(|pagination| pagination.go_to(page))
    }

    pub fn next_page(&mut self) -> bool {
        self.navigate(Pagination::next_page)
    }

    pub fn previous_page(&mut self) -> bool {
        self.navigate(Pagination::previous_page)
    }

    fn navigate(&mut self, target: impl FnOnce(&Pagination) -> Option<usize>) -> bool {
        match target(&self.pagination(self.filtered().len())) {
            Some(page) => {
                self.current_page = page;
                true
            }
            None => false,
        }
    }

    fn products(&self) -> &[Product] {
        self.catalog.ready().map(Vec::as_slice).unwrap_or_default()
    }

    fn filtered(&self) -> Vec<&Product> {
        filter_products(
            self.products(),
            self.selected_category.as_deref(),
            self.search.committed_term(),
        )
    }

    fn pagination(&self, total_items: usize) -> Pagination {
        Pagination::new(total_items, self.items_per_page, self.current_page)
            .max_visible_pages(self.max_visible_pages)
    }

    /// Derives categories, filtered products and the visible page.
    pub fn view(&self) -> ProductsView<'_> {
        let filtered = self.filtered();
        let pagination = self.pagination(filtered.len());
        let visible = pagination.slice(&filtered).to_vec();
        ProductsView {
            categories: categories(self.products()),
            headline: self
                .has_active_filters()
                .then(|| results_headline(filtered.len())),
            filtered,
            visible,
            pagination,
        }
    }
}

/// Summary line for a filtered result count.
pub fn results_headline(count: usize) -> String {
    match count {
        0 => "No products found".to_string(),
        1 => "Found 1 product".to_string(),
        n => format!("Found {n} products"),
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::view::PageMarker;
    use crate::CatalogConfig;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn catalog(count: u64) -> ProductList {
        let products = (1..=count)
            .map(|id| Product {
                id,
                title: format!("Item {id}"),
                category: if id % 2 == 0 { "laptops" } else { "beauty" }.to_string(),
                ..Default::default()
            })
            .collect();
        ProductList {
            products,
            total: count,
            skip: 0,
            limit: 0,
        }
    }

    fn loaded(count: u64) -> ProductsPage {
        let mut page = ProductsPage::default();
        let ticket = page.begin_load();
        assert!(page.finish_load(ticket, Ok(catalog(count))));
        page
    }

    fn visible_ids(page: &ProductsPage) -> Vec<u64> {
        page.view().visible.iter().map(|p| p.id).collect()
    }

    #[test]
    fn first_page_of_unfiltered_catalog() {
        let page = loaded(30);
        let view = page.view();
        assert_eq!(view.categories, vec!["beauty", "laptops"]);
        assert_eq!(view.filtered.len(), 30);
        assert_eq!(visible_ids(&page), (1..=9).collect::<Vec<_>>());
        assert_eq!(view.pagination.total_pages(), 4);
        assert_eq!(view.headline, None);
    }

    #[test]
    fn navigation_respects_bounds() {
        let mut page = loaded(25);
        assert!(!page.previous_page());
        assert!(page.next_page());
        assert_eq!(page.current_page(), 2);
        assert_eq!(visible_ids(&page), (10..=18).collect::<Vec<_>>());
        assert!(page.go_to_page(3));
        assert!(!page.next_page());
        assert!(!page.go_to_page(3));
        assert!(!page.go_to_page(4));
        assert_eq!(visible_ids(&page), (19..=25).collect::<Vec<_>>());
    }

    #[test]
    fn category_change_resets_page() {
        let mut page = loaded(30);
        page.go_to_page(3);
        page.select_category(Some("laptops".into()));
        assert_eq!(page.current_page(), 1);
        let view = page.view();
        assert_eq!(view.filtered.len(), 15);
        assert_eq!(view.headline.as_deref(), Some("Found 15 products"));

        page.go_to_page(2);
        page.select_category(Some("laptops".into()));
        assert_eq!(page.current_page(), 2);
        page.select_category(None);
        assert_eq!(page.current_page(), 1);
    }

    #[test]
    fn committed_search_resets_page() {
        let mut page = loaded(30);
        page.go_to_page(2);

        page.search_input("item 1", ms(0));
        assert!(!page.tick(ms(299)));
        assert_eq!(page.current_page(), 2);
        assert_eq!(page.search().raw_input(), "item 1");

        assert!(page.tick(ms(300)));
        assert_eq!(page.current_page(), 1);
        let view = page.view();
        // "Item 1" and "Item 10".."Item 19"
        assert_eq!(view.filtered.len(), 11);
        assert!(view.pagination.needs_controls());
        assert_eq!(
            view.pagination.markers(),
            vec![PageMarker::Page(1), PageMarker::Page(2)]
        );
    }

    #[test]
    fn search_timer_by_generation() {
        let mut page = loaded(30);
        let stale = page.search_input("item 2", ms(0));
        let latest = page.search_input("item 3", ms(50));
        assert!(!page.on_search_timer(stale.generation));
        assert!(page.on_search_timer(latest.generation));
        assert_eq!(page.search().committed_term(), "item 3");
    }

    #[test]
    fn unmatched_search_is_empty_not_error() {
        let mut page = loaded(12);
        page.search_input("bicycle", ms(0));
        page.tick(ms(300));
        let view = page.view();
        assert!(view.filtered.is_empty());
        assert!(view.visible.is_empty());
        assert!(!view.pagination.needs_controls());
        assert_eq!(view.headline.as_deref(), Some("No products found"));
    }

    #[test]
    fn clear_filters_restores_full_listing() {
        let mut page = loaded(30);
        page.select_category(Some("beauty".into()));
        page.search_input("item 1", ms(0));
        page.tick(ms(300));
        page.search_input("item 11", ms(400));
        assert_eq!(page.view().headline.as_deref(), Some("Found 6 products"));

        page.clear_filters();
        assert!(!page.has_active_filters());
        assert!(!page.search().is_pending());
        assert_eq!(page.search().raw_input(), "");
        assert_eq!(page.view().filtered.len(), 30);
        assert!(!page.tick(ms(10_000)));
    }

    #[test]
    fn failed_load_shows_message() {
        let mut page = ProductsPage::default();
        let ticket = page.begin_load();
        page.finish_load(
            ticket,
            Err(CatalogError::NetworkFailure("Unable to reach the catalog service".into())),
        );
        assert_eq!(
            page.state(),
            &LoadState::Failed("Unable to reach the catalog service".into())
        );
        assert!(page.view().filtered.is_empty());
    }

    #[test]
    fn stale_catalog_response_is_ignored() {
        let mut page = ProductsPage::default();
        let older = page.begin_load();
        let newer = page.begin_load();
        assert!(page.finish_load(newer, Ok(catalog(4))));
        assert!(!page.finish_load(older, Ok(catalog(20))));
        assert_eq!(page.view().filtered.len(), 4);
    }

    #[test]
    fn reload_returns_to_first_page() {
        let mut page = loaded(30);
        assert!(page.go_to_page(3));
        let ticket = page.begin_load();
        let total_pages = page.view().pagination.total_pages();
        assert_eq!(page.current_page(), 1);
        assert!(page.current_page() <= total_pages);
        assert!(!page.go_to_page(1));

        assert!(page.finish_load(ticket, Ok(catalog(30))));
        assert_eq!(page.current_page(), 1);
        assert!(page.go_to_page(2));
        assert_eq!(visible_ids(&page), (10..=18).collect::<Vec<_>>());
    }

    #[test]
    fn current_page_follows_shrinking_listing() {
        let mut page = loaded(30);
        assert!(page.go_to_page(4));
        let ticket = page.begin_load();
        assert!(page.finish_load(ticket, Ok(catalog(5))));
        assert_eq!(page.current_page(), 1);
        assert_eq!(page.view().pagination.total_pages(), 1);
    }

    #[test]
    fn empty_category_means_all_categories() {
        let mut page = loaded(30);
        page.select_category(Some(String::new()));
        assert_eq!(page.selected_category(), None);
        assert!(!page.has_active_filters());
        assert_eq!(page.view().filtered.len(), 30);

        page.select_category(Some("beauty".into()));
        page.select_category(Some(String::new()));
        assert_eq!(page.selected_category(), None);
        assert_eq!(page.view().filtered.len(), 30);
    }

    #[test]
    fn headline_wording() {
        assert_eq!(results_headline(0), "No products found");
        assert_eq!(results_headline(1), "Found 1 product");
        assert_eq!(results_headline(42), "Found 42 products");
    }

    #[tokio::test]
    async fn load_fetches_whole_catalog() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/products").query_param("limit", "0");
            then.status(200).json_body(json!({
                "products": [
                    { "id": 1, "title": "Essence Mascara", "category": "beauty" },
                    { "id": 2, "title": "Annibale Colombo Bed", "category": "furniture" }
                ],
                "total": 2, "skip": 0, "limit": 2
            }));
        });

        let client = CatalogClient::new(&CatalogConfig::new(&server.base_url()).unwrap()).unwrap();
        let mut page = ProductsPage::default();
        assert!(page.load(&client).await);
        mock.assert();
        assert_eq!(page.view().categories, vec!["beauty", "furniture"]);
    }
}
