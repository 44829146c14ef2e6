//! Page DTOs returned by the paginated report endpoints.
//!
//! The JSON shape is camelCase: `{"items": [...], "currentPage": 2,
//! "totalPages": 5, "totalItems": 47, "itemsPerPage": 10}`.

use serde::{Deserialize, Serialize};

/// Pagination metadata owned by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// 1-based.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

impl PageMeta {
    pub fn new(current_page: usize, total_pages: usize, total_items: usize, items_per_page: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
        }
    }

    /// Metadata with `total_pages` at least 1 and `current_page` inside
    /// `[1, total_pages]`.
    pub fn normalized(self) -> Self {
        let total_pages = self.total_pages.max(1);
        Self {
            current_page: self.current_page.clamp(1, total_pages),
            total_pages,
            ..self
        }
    }
}

/// One page of rows as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, meta: PageMeta) -> Self {
        Self { items, meta }
    }
}
