//! Page arithmetic and page-button layout for paginated listings.

/// Page buttons shown before the layout collapses into ellipses.
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// One entry in a row of page buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Pagination of `total_items` items into pages of `items_per_page`.
///
/// The current page is kept within `1..=total_pages()` at all times. An
/// empty listing still counts as a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    items_per_page: usize,
    current_page: usize,
    max_visible_pages: usize,
}

impl Pagination {
    /// Zero page sizes are treated as one item per page.
    pub fn new(total_items: usize, items_per_page: usize, current_page: usize) -> Self {
        let mut pagination = Self {
            total_items,
            items_per_page: items_per_page.max(1),
            current_page: 1,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
        };
        pagination.current_page = pagination.clamp_page(current_page);
        pagination
    }

    pub fn max_visible_pages(mut self, max_visible_pages: usize) -> Self {
        self.max_visible_pages = max_visible_pages.max(1);
        self
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page).max(1)
    }

    /// Whether there is more than one page to move between.
    pub fn needs_controls(&self) -> bool {
        self.total_pages() > 1
    }

    /// 1-based index of the first item on the current page, `0` when empty.
    pub fn start_item(&self) -> usize {
        ((self.current_page - 1) * self.items_per_page + 1).min(self.total_items)
    }

    /// 1-based index of the last item on the current page, `0` when empty.
    pub fn end_item(&self) -> usize {
        (self.current_page * self.items_per_page).min(self.total_items)
    }

    /// Pulls `page` into `1..=total_pages()`.
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages())
    }

    /// The items of `items` that fall on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.current_page - 1) * self.items_per_page).min(items.len());
        let end = (start + self.items_per_page).min(items.len());
        &items[start..end]
    }

    /// Target of a "previous" button, or `None` on the first page.
    pub fn previous_page(&self) -> Option<usize> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Target of a "next" button, or `None` on the last page.
    pub fn next_page(&self) -> Option<usize> {
        (self.current_page < self.total_pages()).then(|| self.current_page + 1)
    }

    /// Target of a direct jump, or `None` when `page` is current or out of range.
    pub fn go_to(&self, page: usize) -> Option<usize> {
        (page != self.current_page && (1..=self.total_pages()).contains(&page)).then_some(page)
    }

    /// Page buttons to render: first and last pages always, a window around
    /// the current page, and an ellipsis for each gap in between.
    pub fn markers(&self) -> Vec<PageMarker> {
        let total = self.total_pages();
        let max_visible = self.max_visible_pages;
        if total <= max_visible {
            return (1..=total).map(PageMarker::Page).collect();
        }

        let current = self.current_page;
        let half = max_visible / 2;
        let mut start = current.saturating_sub(half).max(2);
        let mut end = (current + half).min(total - 1);
        if current <= half + 1 {
            end = max_visible.min(total - 1);
        }
        if current + half >= total {
            start = (total + 1).saturating_sub(max_visible).max(2);
        }

        let mut markers = vec![PageMarker::Page(1)];
        if start > 2 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.extend((start..=end).map(PageMarker::Page));
        if end < total - 1 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(total));
        markers
    }
}
