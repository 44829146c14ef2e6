//! Sort, page and expansion state of one table instance.

mod expansion;
mod pagination;
mod sort;

use std::fmt;

use lims_proto::prelude::{PageMeta, RowRecord, Sorter};

use crate::config::TableConfig;

pub use expansion::ExpansionSet;
pub use pagination::{page_count, page_window, ClientPager, Navigation, PageRequest, PaginationMode};
pub use sort::{sorted, toggle as toggle_sort};

/// Where the table currently is, in 1-based page terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePosition {
    pub current_page: usize,
    pub page_count: usize,
    pub total_items: usize,
    pub page_size: usize,
}

/// State owned by a mounted table: the active sort, client-side paging and
/// the expansion set. Rows and column descriptors stay with the caller and
/// are passed to each call.
pub struct TableState<R: RowRecord> {
    sort: Option<Sorter<R::Key>>,
    pagination: PaginationMode,
    expanded: ExpansionSet<R::Id>,
    config: TableConfig,
}

impl<R: RowRecord> Clone for TableState<R> {
    fn clone(&self) -> Self {
        Self {
            sort: self.sort.clone(),
            pagination: self.pagination,
            expanded: self.expanded.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R: RowRecord> fmt::Debug for TableState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableState")
            .field("sort", &self.sort)
            .field("pagination", &self.pagination)
            .field("expanded", &self.expanded)
            .field("config", &self.config)
            .finish()
    }
}

impl<R: RowRecord> TableState<R> {
    fn with_mode(pagination: PaginationMode, config: &TableConfig) -> Self {
        Self {
            sort: None,
            pagination,
            expanded: ExpansionSet::new(),
            config: config.clone(),
        }
    }

    /// A table that sorts and pages `items` itself.
    pub fn client(config: &TableConfig) -> Self {
        Self::with_mode(
            PaginationMode::Client(ClientPager::new(config.items_per_page)),
            config,
        )
    }

    /// A table showing one page served by the data source.
    pub fn server(meta: PageMeta, config: &TableConfig) -> Self {
        Self::with_mode(PaginationMode::Server(meta.normalized()), config)
    }

    pub fn with_sorter(mut self, sorter: Option<Sorter<R::Key>>) -> Self {
        self.sort = sorter;
        self
    }

    pub fn with_details(mut self, show_details: bool) -> Self {
        self.config.show_details_buttons = show_details;
        self
    }

    pub fn sorter(&self) -> Option<&Sorter<R::Key>> {
        self.sort.as_ref()
    }

    pub fn pagination(&self) -> &PaginationMode {
        &self.pagination
    }

    pub fn show_details(&self) -> bool {
        self.config.show_details_buttons
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn expansion(&self) -> &ExpansionSet<R::Id> {
        &self.expanded
    }

    pub fn is_expanded(&self, id: &R::Id) -> bool {
        self.expanded.is_expanded(id)
    }

    /// Header click on `column`.
    ///
    /// The indicator state updates in both modes. In server mode the rows
    /// are not reordered locally, so the new sorter is returned for the data
    /// source to apply.
    pub fn click_header(&mut self, column: R::Key) -> Option<Sorter<R::Key>> {
        let sorter = sort::toggle(self.sort.take(), column);
        log::debug!("sort {:?} {:?}", sorter.column, sorter.direction);
        self.sort = Some(sorter.clone());
        self.pagination.is_server().then_some(sorter)
    }

    pub fn set_sort(&mut self, sorter: Option<Sorter<R::Key>>) {
        self.sort = sorter;
    }

    /// Flips the detail panel of row `id`; returns whether it is now open.
    pub fn toggle_details(&mut self, id: R::Id) -> bool {
        self.expanded.toggle(id)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.collapse_all();
    }

    /// Applies a pagination control action.
    ///
    /// Client mode moves the page and returns `None`. Server mode leaves the
    /// state untouched and returns the page to fetch, or `None` when the
    /// action would not leave the current page.
    pub fn navigate(&mut self, nav: Navigation, total_items: usize) -> Option<PageRequest> {
        match &mut self.pagination {
            PaginationMode::Client(pager) => {
                pager.navigate(nav, total_items);
                None
            }
            PaginationMode::Server(meta) => {
                let target = nav.target(meta.current_page, meta.total_pages);
                if target == meta.current_page {
                    return None;
                }
                log::debug!("requesting page {target} of {}", meta.total_pages);
                Some(PageRequest::Page(target))
            }
        }
    }

    /// Page-size selector change. Client mode resets to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Option<PageRequest> {
        match &mut self.pagination {
            PaginationMode::Client(pager) => {
                pager.set_page_size(page_size);
                None
            }
            PaginationMode::Server(meta) => {
                if page_size == 0 || page_size == meta.items_per_page {
                    return None;
                }
                log::debug!("requesting page size {page_size}");
                Some(PageRequest::PageSize(page_size))
            }
        }
    }

    /// Clamps the client page index after the row count changed.
    pub fn sync(&mut self, total_items: usize) {
        if let PaginationMode::Client(pager) = &mut self.pagination {
            pager.clamp(total_items);
        }
    }

    /// Takes over the pagination metadata the caller passed with a newly
    /// fetched page.
    pub fn set_server_page(&mut self, meta: PageMeta) {
        if !self.pagination.is_server() {
            log::warn!("switching table to server pagination");
        }
        self.pagination = PaginationMode::Server(meta.normalized());
    }

    /// Rows of the current page, in display order.
    pub fn visible_rows<'a>(&self, items: &'a [R]) -> Vec<&'a R> {
        match &self.pagination {
            PaginationMode::Client(pager) => {
                let mut rows = sort::sorted(items, self.sort.as_ref());
                let range = pager.range(rows.len());
                rows.truncate(range.end);
                rows.drain(..range.start);
                rows
            }
            PaginationMode::Server(_) => items.iter().collect(),
        }
    }

    pub fn position(&self, items_len: usize) -> PagePosition {
        match &self.pagination {
            PaginationMode::Client(pager) => PagePosition {
                current_page: pager.clamped_index(items_len) + 1,
                page_count: pager.page_count(items_len),
                total_items: items_len,
                page_size: pager.page_size,
            },
            PaginationMode::Server(meta) => PagePosition {
                current_page: meta.current_page,
                page_count: meta.total_pages,
                total_items: meta.total_items,
                page_size: meta.items_per_page,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lims_proto::prelude::JsonRecord;
    use serde_json::json;

    fn items(n: usize) -> Vec<JsonRecord> {
        (0..n)
            .map(|i| JsonRecord::try_from(json!({"id": i + 1, "seq": i + 1})).unwrap())
            .collect()
    }

    #[test]
    fn test_client_click_header_returns_nothing() {
        let mut state: TableState<JsonRecord> = TableState::client(&TableConfig::default());
        assert_eq!(state.click_header("seq".to_string()), None);
        assert_eq!(state.sorter(), Some(&Sorter::asc("seq".to_string())));
    }

    #[test]
    fn test_server_click_header_reports_sorter() {
        let mut state: TableState<JsonRecord> =
            TableState::server(PageMeta::new(1, 3, 30, 10), &TableConfig::default());
        state.click_header("seq".to_string());
        let sorter = state.click_header("seq".to_string());
        assert_eq!(sorter, Some(Sorter::desc("seq".to_string())));
    }

    #[test]
    fn test_visible_rows_slices_sorted_rows() {
        let rows = items(23);
        let config = TableConfig {
            items_per_page: 10,
            ..TableConfig::default()
        };
        let mut state = TableState::client(&config).with_sorter(Some(Sorter::desc("seq".to_string())));
        state.navigate(Navigation::Page(3), rows.len());
        let visible = state.visible_rows(&rows);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].id(), "3");
        assert_eq!(visible[2].id(), "1");
    }

    #[test]
    fn test_sync_clamps_after_rows_shrink() {
        let mut state: TableState<JsonRecord> = TableState::client(&TableConfig::default());
        state.navigate(Navigation::Last, 23);
        assert_eq!(state.position(23).current_page, 5);
        state.sync(7);
        assert_eq!(state.position(7).current_page, 2);
    }

    #[test]
    fn test_server_set_page_size_requests_change() {
        let mut state: TableState<JsonRecord> =
            TableState::server(PageMeta::new(2, 5, 47, 10), &TableConfig::default());
        assert_eq!(state.set_page_size(10), None);
        assert_eq!(state.set_page_size(20), Some(PageRequest::PageSize(20)));
        assert_eq!(state.position(0).page_size, 10);
    }
}
