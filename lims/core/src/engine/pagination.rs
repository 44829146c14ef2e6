use std::ops::{Range, RangeInclusive};

use lims_proto::prelude::PageMeta;

/// Number of pages needed for `total_items`; never less than 1.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// The run of at most `width` page numbers (1-based) shown as buttons.
///
/// All pages fit when `total_pages <= width`; otherwise the window is
/// centered on `current` and shifted to stay inside `[1, total_pages]`.
pub fn page_window(current: usize, total_pages: usize, width: usize) -> RangeInclusive<usize> {
    let total = total_pages.max(1);
    let width = width.clamp(1, total);
    let current = current.clamp(1, total);
    let start = current
        .saturating_sub(width / 2)
        .max(1)
        .min(total - width + 1);
    start..=start + width - 1
}

/// A pagination control action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    First,
    Prev,
    Next,
    Last,
    /// Jump to a 1-based page number.
    Page(usize),
}

impl Navigation {
    /// The 1-based page this action leads to from `current`.
    pub fn target(self, current: usize, total_pages: usize) -> usize {
        let total = total_pages.max(1);
        let current = current.clamp(1, total);
        match self {
            Navigation::First => 1,
            Navigation::Prev => current.saturating_sub(1).max(1),
            Navigation::Next => (current + 1).min(total),
            Navigation::Last => total,
            Navigation::Page(page) => page.clamp(1, total),
        }
    }
}

/// A change the data source has to perform in server mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Fetch this 1-based page.
    Page(usize),
    /// Fetch with a new page size.
    PageSize(usize),
}

/// Page state owned by the table when it slices rows itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientPager {
    /// 0-based.
    pub page_index: usize,
    pub page_size: usize,
}

impl ClientPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_count(&self, total_items: usize) -> usize {
        page_count(total_items, self.page_size)
    }

    /// Page index clamped to the pages `total_items` produce.
    pub fn clamped_index(&self, total_items: usize) -> usize {
        self.page_index.min(self.page_count(total_items) - 1)
    }

    pub fn clamp(&mut self, total_items: usize) {
        let clamped = self.clamped_index(total_items);
        if clamped != self.page_index {
            log::debug!("page index {} clamped to {}", self.page_index, clamped);
            self.page_index = clamped;
        }
    }

    pub fn navigate(&mut self, nav: Navigation, total_items: usize) {
        let current = self.clamped_index(total_items) + 1;
        self.page_index = nav.target(current, self.page_count(total_items)) - 1;
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            log::warn!("ignoring page size 0");
            return;
        }
        self.page_size = page_size;
        self.page_index = 0;
    }

    /// Index range of the visible slice of `total_items` rows.
    pub fn range(&self, total_items: usize) -> Range<usize> {
        let start = self.clamped_index(total_items) * self.page_size;
        let end = (start + self.page_size).min(total_items);
        start.min(end)..end
    }
}

/// Who slices the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// The table sorts and slices `items` itself.
    Client(ClientPager),
    /// `items` already is the current page; navigation becomes
    /// [`PageRequest`]s for the data source.
    Server(PageMeta),
}

impl PaginationMode {
    pub fn is_server(&self) -> bool {
        matches!(self, PaginationMode::Server(_))
    }
}
