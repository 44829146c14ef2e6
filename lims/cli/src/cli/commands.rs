use std::path::PathBuf;

use clap::{Args, Subcommand};
use lims_core::{TableConfig, TableError};
use lims_proto::prelude::ColumnDescriptor;

#[derive(Args, Default, Debug, Clone)]
pub struct Settings {
    /// Rows per page in client mode
    ///
    /// ```bash
    /// lims-grid show rows.json --page-size 20
    /// ```
    #[arg(long, env = "LIMS_PAGE_SIZE")]
    pub page_size: Option<usize>,

    /// Choices offered by the page-size selector, comma separated
    #[arg(long, env = "LIMS_PAGE_SIZES", value_delimiter = ',')]
    pub page_sizes: Option<Vec<usize>>,

    /// Maximum number of numbered page buttons
    #[arg(long, env = "LIMS_PAGE_WINDOW")]
    pub page_window: Option<usize>,

    /// Hide the details column; `LIMS_SHOW_DETAILS=false` does the same
    #[arg(long)]
    pub no_details: bool,
}

impl Settings {
    /// `LIMS_*` environment settings with the command-line flags on top.
    pub fn to_config(&self) -> Result<TableConfig, TableError> {
        self.apply(TableConfig::from_env()?)
    }

    pub fn apply(&self, mut config: TableConfig) -> Result<TableConfig, TableError> {
        if let Some(size) = self.page_size {
            config.items_per_page = size;
        }
        if let Some(sizes) = &self.page_sizes {
            config.page_size_options = sizes.clone();
        }
        if let Some(window) = self.page_window {
            config.page_window = window;
        }
        if self.no_details {
            config.show_details_buttons = false;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one page of a JSON row file as a table
    ///
    /// A JSON array is paged locally. An object with `items`,
    /// `currentPage`, `totalPages`, `totalItems` and `itemsPerPage` is
    /// shown as a server page.
    ///
    /// ```bash
    /// lims-grid show patients.json --columns id:ID,name:Name --sort name --page 2
    /// ```
    #[command(visible_aliases = ["s"])]
    Show {
        #[arg()]
        file: PathBuf,

        /// Columns as KEY or KEY:LABEL; defaults to the keys of the first row
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<ColumnDescriptor>,

        /// Column key to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// 1-based page to show
        #[arg(short, long)]
        page: Option<usize>,

        /// Ids of rows whose details are shown
        #[arg(short, long)]
        expand: Vec<String>,

        #[command(flatten)]
        settings: Settings,
    },

    /// Print the numbered page buttons for a position
    #[command(visible_aliases = ["w"])]
    Window {
        #[arg(long)]
        current: usize,

        #[arg(long)]
        total: usize,

        #[arg(long, env = "LIMS_PAGE_WINDOW", default_value_t = 5)]
        width: usize,
    },
}
