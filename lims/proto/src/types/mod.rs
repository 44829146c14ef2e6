mod cell;
mod column;
mod convert;
mod detail;
mod error;
mod record;
mod sort;

pub use cell::Cell;
pub use column::ColumnDescriptor;
pub use convert::{CellExt, FromCell};
pub use detail::DetailRecord;
pub use error::ProtoError;
pub use record::{JsonRecord, RowRecord};
pub use sort::{SortDirection, Sorter};
