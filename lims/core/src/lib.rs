pub mod adapter;
pub mod config;
pub mod engine;
pub mod error;
pub mod view;

pub use adapter::{build_columns, CellContent, ColumnDef};
pub use config::TableConfig;
pub use engine::{
    page_count, page_window, sorted, toggle_sort, ClientPager, ExpansionSet, Navigation,
    PagePosition, PageRequest, PaginationMode, TableState,
};
pub use error::TableError;
pub use view::{
    BadgeTone, BodyRow, DetailView, HeaderCell, PagerView, SortIndicator, SortableHeader, TableView,
};
