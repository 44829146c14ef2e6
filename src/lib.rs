//! Sortable, paginated data tables for LIMS front-ends.
//!
//! Rows implement [`RowRecord`](types::prelude::RowRecord), callers describe
//! columns with [`ColumnDescriptor`](types::prelude::ColumnDescriptor) and a
//! [`TableState`](table::TableState) tracks sort, page and expanded rows.
//! The view model it produces is rendered by the web component and the
//! `lims-grid` terminal tool.

pub use lims_core as table;
pub use lims_proto as types;

pub mod prelude {
    pub use lims_core::{
        BadgeTone, CellContent, Navigation, PageRequest, PagerView, SortIndicator, TableConfig,
        TableError, TableState, TableView,
    };
    pub use lims_proto::prelude::*;
}

const ENV_LIMS_LOGLEVEL: &str = "LIMS_LOGLEVEL";

/// Initializes logging from `LIMS_LOGLEVEL`. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::try_init_from_env(env_logger::Env::new().filter(ENV_LIMS_LOGLEVEL));
}

/// Table settings from the `LIMS_*` environment, logging any rejected value
/// and falling back to the defaults.
pub fn config_from_env() -> lims_core::TableConfig {
    init_logging();
    match lims_core::TableConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring table settings from environment: {err}");
            lims_core::TableConfig::default()
        }
    }
}
