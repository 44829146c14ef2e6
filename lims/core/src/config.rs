use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

pub const ENV_LIMS_PAGE_SIZE: &str = "LIMS_PAGE_SIZE";
pub const ENV_LIMS_PAGE_SIZES: &str = "LIMS_PAGE_SIZES";
pub const ENV_LIMS_PAGE_WINDOW: &str = "LIMS_PAGE_WINDOW";
pub const ENV_LIMS_SHOW_DETAILS: &str = "LIMS_SHOW_DETAILS";

/// Display settings shared by every table instance.
///
/// # Examples
/// ```rust
/// use lims_core::TableConfig;
///
/// let config = TableConfig::from_json(r#"{"items_per_page": 10}"#)?;
/// assert_eq!(config.items_per_page, 10);
/// assert_eq!(config.page_window, 5);
/// # Ok::<(), lims_core::TableError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Initial page size in client mode.
    pub items_per_page: usize,
    /// Choices offered by the page-size selector.
    pub page_size_options: Vec<usize>,
    /// Maximum number of numbered page buttons.
    pub page_window: usize,
    /// Whether rows get a detail toggle column.
    pub show_details_buttons: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            items_per_page: 5,
            page_size_options: vec![5, 10, 20, 50],
            page_window: 5,
            show_details_buttons: true,
        }
    }
}

impl TableConfig {
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `LIMS_*` environment variables.
    pub fn from_env() -> Result<Self, TableError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps a `LIMS_*` variable name
    /// to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, TableError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LIMS_PAGE_SIZE) {
            self.items_per_page = parse_setting(ENV_LIMS_PAGE_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_LIMS_PAGE_SIZES) {
            self.page_size_options = value
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| parse_setting(ENV_LIMS_PAGE_SIZES, s))
                .collect::<Result<_, _>>()?;
        }
        if let Some(value) = lookup(ENV_LIMS_PAGE_WINDOW) {
            self.page_window = parse_setting(ENV_LIMS_PAGE_WINDOW, &value)?;
        }
        if let Some(value) = lookup(ENV_LIMS_SHOW_DETAILS) {
            self.show_details_buttons = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(TableError::InvalidSetting {
                        key: ENV_LIMS_SHOW_DETAILS.to_string(),
                        value,
                    })
                }
            };
        }
        self.validate()?;
        log::debug!("table config: {:?}", self);
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.items_per_page == 0 || self.page_size_options.contains(&0) {
            return Err(TableError::ZeroPageSize);
        }
        if self.page_window == 0 {
            return Err(TableError::ZeroPageWindow);
        }
        Ok(())
    }

    /// Selector choices, including the active page size when it is not one
    /// of the configured options. A zero size is never offered.
    pub fn page_sizes_with(&self, active: usize) -> Vec<usize> {
        let mut sizes = self.page_size_options.clone();
        if active > 0 && !sizes.contains(&active) {
            sizes.push(active);
        }
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

fn parse_setting<T: FromStr>(key: &str, value: &str) -> Result<T, TableError> {
    value.trim().parse().map_err(|_| TableError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    })
}
