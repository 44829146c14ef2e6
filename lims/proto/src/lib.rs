pub mod dto;
pub mod types;

pub mod prelude {
    // --- Table Model ---
    pub use crate::types::{ColumnDescriptor, DetailRecord, JsonRecord, RowRecord};
    pub use crate::types::{SortDirection, Sorter};

    // --- Cell Values ---
    pub use crate::types::Cell;
    pub use crate::types::{CellExt, FromCell};

    // --- Error Handling ---
    pub use crate::types::ProtoError;

    // --- DTO Structures ---
    pub use crate::dto::page::{PageMeta, PageResponse};
}
