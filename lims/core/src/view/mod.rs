//! Framework-free description of what a table renders.
//!
//! [`TableView`] is rebuilt from the state, the column descriptors and the
//! rows on every render. Front-ends map it to markup or terminal output
//! and route user actions back into [`TableState`].

mod badge;

use lims_proto::prelude::{ColumnDescriptor, DetailRecord, RowRecord, SortDirection};

use crate::adapter::{build_columns, CellContent, ColumnDef};
use crate::engine::{page_window, TableState};

pub use badge::BadgeTone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Neutral,
    Asc,
    Desc,
}

impl SortIndicator {
    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::Neutral => "↕",
            SortIndicator::Asc => "▲",
            SortIndicator::Desc => "▼",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            SortIndicator::Neutral => "sortable",
            SortIndicator::Asc => "sortable sorted-asc",
            SortIndicator::Desc => "sortable sorted-desc",
        }
    }
}

/// Sort target of a clickable header.
#[derive(Debug, Clone, PartialEq)]
pub struct SortableHeader<K> {
    pub key: K,
    pub indicator: SortIndicator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell<K> {
    pub label: String,
    /// `None` for the details column, which cannot be sorted.
    pub sort: Option<SortableHeader<K>>,
    pub width: Option<u16>,
}

impl<K> HeaderCell<K> {
    pub fn indicator(&self) -> Option<SortIndicator> {
        self.sort.as_ref().map(|sort| sort.indicator)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub status: String,
    pub tone: BadgeTone,
    pub fields: Vec<(String, String)>,
}

impl From<DetailRecord> for DetailView {
    fn from(record: DetailRecord) -> Self {
        Self {
            tone: BadgeTone::from_status(&record.status),
            name: record.name,
            status: record.status,
            fields: record.fields.into_iter().collect(),
        }
    }
}

pub struct BodyRow<'a, R: RowRecord> {
    pub row: &'a R,
    pub id: R::Id,
    pub cells: Vec<CellContent>,
    pub expanded: bool,
    /// Present when the row is expanded; rendered as a full-width row
    /// directly below it.
    pub details: Option<Vec<DetailView>>,
}

/// State of the pagination control bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    /// 1-based.
    pub current_page: usize,
    pub page_count: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub page_sizes: Vec<usize>,
    /// Numbered page buttons.
    pub window: Vec<usize>,
}

impl PagerView {
    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.current_page < self.page_count
    }

    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} ({} items)",
            self.current_page, self.page_count, self.total_items
        )
    }
}

pub struct TableView<'a, R: RowRecord> {
    pub header: Vec<HeaderCell<R::Key>>,
    pub rows: Vec<BodyRow<'a, R>>,
    pub pager: PagerView,
}

impl<'a, R: RowRecord> TableView<'a, R> {
    pub fn build(state: &TableState<R>, columns: &[ColumnDescriptor<R::Key>], items: &'a [R]) -> Self {
        let defs = build_columns(columns, state.show_details());

        let header = defs
            .iter()
            .map(|def| HeaderCell {
                label: def.header().to_string(),
                sort: def.id().map(|key| SortableHeader {
                    key: key.clone(),
                    indicator: match state.sorter() {
                        Some(sorter) if &sorter.column == key => match sorter.direction {
                            SortDirection::Asc => SortIndicator::Asc,
                            SortDirection::Desc => SortIndicator::Desc,
                        },
                        _ => SortIndicator::Neutral,
                    },
                }),
                width: def.width(),
            })
            .collect();

        let rows = state
            .visible_rows(items)
            .into_iter()
            .map(|row| body_row(state, &defs, row))
            .collect();

        let position = state.position(items.len());
        let pager = PagerView {
            current_page: position.current_page,
            page_count: position.page_count,
            total_items: position.total_items,
            page_size: position.page_size,
            page_sizes: state.config().page_sizes_with(position.page_size),
            window: page_window(
                position.current_page,
                position.page_count,
                state.config().page_window,
            )
            .collect(),
        };

        Self { header, rows, pager }
    }

    /// Column count, for detail rows spanning the whole table.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

fn body_row<'a, R: RowRecord>(state: &TableState<R>, defs: &[ColumnDef<R::Key>], row: &'a R) -> BodyRow<'a, R> {
    let id = row.id();
    let expanded = state.show_details() && state.is_expanded(&id);
    BodyRow {
        cells: defs.iter().map(|def| def.render_cell(row, expanded)).collect(),
        details: expanded.then(|| row.details().into_iter().map(DetailView::from).collect()),
        row,
        id,
        expanded,
    }
}

impl<R: RowRecord> TableState<R> {
    pub fn view<'a>(&self, columns: &[ColumnDescriptor<R::Key>], items: &'a [R]) -> TableView<'a, R> {
        TableView::build(self, columns, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;
    use lims_proto::prelude::{JsonRecord, PageMeta, Sorter};
    use serde_json::json;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("name".to_string(), "Name"),
            ColumnDescriptor::new("age".to_string(), "Age"),
        ]
    }

    #[test]
    fn test_header_indicators() {
        let state: TableState<JsonRecord> = TableState::client(&TableConfig::default())
            .with_sorter(Some(Sorter::desc("age".to_string())));
        let view = state.view(&columns(), &[]);

        assert_eq!(view.column_count(), 3);
        assert_eq!(view.header[0].indicator(), Some(SortIndicator::Neutral));
        assert_eq!(view.header[1].indicator(), Some(SortIndicator::Desc));
        assert_eq!(view.header[2].indicator(), None);
        assert_eq!(view.header[2].label, "Details");
        assert_eq!(
            view.header[1].sort,
            Some(SortableHeader {
                key: "age".to_string(),
                indicator: SortIndicator::Desc
            })
        );
    }

    #[test]
    fn test_zero_server_page_size_is_not_offered() {
        let meta = PageMeta::new(1, 1, 0, 0);
        let state: TableState<JsonRecord> = TableState::server(meta, &TableConfig::default());
        let view = state.view(&columns(), &[]);
        assert_eq!(view.pager.page_sizes, vec![5, 10, 20, 50]);
    }

    #[test]
    fn test_expanded_row_carries_details() {
        let items = vec![JsonRecord::try_from(json!({
            "id": "P-1",
            "name": "S. Menon",
            "tests": [{"name": "HbA1c", "status": "Active"}]
        }))
        .unwrap()];
        let mut state: TableState<JsonRecord> = TableState::client(&TableConfig::default());
        state.toggle_details("P-1".to_string());

        let view = state.view(&columns(), &items);
        let row = &view.rows[0];
        assert!(row.expanded);
        let details = row.details.as_ref().unwrap();
        assert_eq!(details[0].name, "HbA1c");
        assert_eq!(details[0].tone, BadgeTone::Green);
        assert_eq!(
            row.cells[2],
            CellContent::Toggle {
                expanded: true,
                label: "Hide"
            }
        );
    }

    #[test]
    fn test_details_hidden_without_toggle_column() {
        let items = vec![JsonRecord::try_from(json!({"id": 1, "name": "X"})).unwrap()];
        let mut state: TableState<JsonRecord> =
            TableState::client(&TableConfig::default()).with_details(false);
        state.toggle_details("1".to_string());

        let view = state.view(&columns(), &items);
        assert_eq!(view.column_count(), 2);
        assert!(!view.rows[0].expanded);
        assert!(view.rows[0].details.is_none());
    }

    #[test]
    fn test_pager_summary() {
        let pager = PagerView {
            current_page: 2,
            page_count: 5,
            total_items: 47,
            page_size: 10,
            page_sizes: vec![5, 10],
            window: vec![1, 2, 3, 4, 5],
        };
        assert!(pager.can_prev());
        assert!(pager.can_next());
        assert_eq!(pager.summary(), "Page 2 of 5 (47 items)");
    }
}
