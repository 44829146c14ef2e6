//! Terminal rendering of a [`TableView`].

use anyhow::{bail, Result};
use lims_core::{CellContent, Navigation, PageRequest, TableConfig, TableState, TableView};
use lims_proto::prelude::*;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Rows loaded from a JSON file.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A plain array, paged locally.
    Rows(Vec<JsonRecord>),
    /// One page served by a backend.
    Page(PageResponse<JsonRecord>),
}

impl Input {
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Array(_) => Ok(Input::Rows(serde_json::from_value(value)?)),
            Value::Object(_) => Ok(Input::Page(serde_json::from_value(value)?)),
            _ => bail!("expected a JSON array of rows or a page object"),
        }
    }

    pub fn items(&self) -> &[JsonRecord] {
        match self {
            Input::Rows(rows) => rows,
            Input::Page(page) => &page.items,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub columns: Vec<ColumnDescriptor>,
    pub sorter: Option<Sorter>,
    /// 1-based.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub expand: Vec<String>,
}

/// Scalar fields of the first row, in key order.
pub fn default_columns(rows: &[JsonRecord]) -> Vec<ColumnDescriptor> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    first
        .keys()
        .filter(|key| !matches!(first.cell(&key.to_string()), Cell::Records(_)))
        .map(|key| ColumnDescriptor::new(key.to_string(), key))
        .collect()
}

/// Builds the table state for `input`, applies the options and renders the
/// visible page.
pub fn show(input: &Input, options: &ShowOptions, config: &TableConfig) -> String {
    let items = input.items();
    let columns = if options.columns.is_empty() {
        default_columns(items)
    } else {
        options.columns.clone()
    };
    if let Some(sorter) = &options.sorter {
        if !columns.iter().any(|c| c.key == sorter.column) {
            log::warn!("sort column {:?} is not displayed", sorter.column);
        }
    }

    let mut state: TableState<JsonRecord> = match input {
        Input::Rows(_) => TableState::client(config),
        Input::Page(page) => TableState::server(page.meta, config),
    }
    .with_sorter(options.sorter.clone());

    let mut requests = Vec::new();
    if let Some(size) = options.page_size {
        requests.extend(state.set_page_size(size));
    }
    if let Some(page) = options.page {
        requests.extend(state.navigate(Navigation::Page(page), items.len()));
    }
    for id in &options.expand {
        state.toggle_details(id.clone());
    }

    let view = state.view(&columns, items);
    let mut out = render(&view);
    for request in requests {
        log::info!("data source request: {request:?}");
        out.push_str(&match request {
            PageRequest::Page(page) => format!("-> fetch page {page} from the data source\n"),
            PageRequest::PageSize(size) => format!("-> fetch with page size {size} from the data source\n"),
        });
    }
    out
}

/// Table, detail panels of expanded rows and the pagination bar.
pub fn render<R: RowRecord>(view: &TableView<'_, R>) -> String {
    let mut builder = Builder::default();
    builder.push_record(view.header.iter().map(|cell| match cell.indicator() {
        Some(indicator) => format!("{} {}", cell.label, indicator.glyph()),
        None => cell.label.clone(),
    }));
    for row in &view.rows {
        builder.push_record(row.cells.iter().map(|cell| match cell {
            CellContent::Value(value) => value.to_string(),
            CellContent::Toggle { label, .. } => format!("[{label}]"),
        }));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    let mut out = format!("{table}\n");

    for row in &view.rows {
        let Some(details) = &row.details else {
            continue;
        };
        out.push_str(&format!("Details of {}:\n", row.id.to_string()));
        if details.is_empty() {
            out.push_str("  (none)\n");
        }
        for detail in details {
            out.push_str(&format!("  {} [{}]", detail.name, detail.status));
            for (key, value) in &detail.fields {
                out.push_str(&format!("  {key}={value}"));
            }
            out.push('\n');
        }
    }

    let pager = &view.pager;
    let window = pager
        .window
        .iter()
        .map(|&page| {
            if page == pager.current_page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let sizes = pager
        .page_sizes
        .iter()
        .map(|&size| {
            if size == pager.page_size {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!(
        "{}  {} {} {} {} {}  per page: {}\n",
        pager.summary(),
        if pager.can_prev() { "«" } else { " " },
        if pager.can_prev() { "‹" } else { " " },
        window,
        if pager.can_next() { "›" } else { " " },
        if pager.can_next() { "»" } else { " " },
        sizes,
    ));
    out
}
