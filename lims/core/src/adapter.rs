//! Turns caller column descriptors into the column definitions the table
//! renders, appending the detail toggle column when requested.

use std::fmt::Debug;

use lims_proto::prelude::{Cell, ColumnDescriptor, RowRecord};

pub const DETAILS_HEADER: &str = "Details";
const DETAILS_WIDTH: u16 = 8;

/// Label of the detail toggle for a row in the given state.
pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "Hide"
    } else {
        "Show"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnDef<K> {
    /// Shows the row value stored under `key`.
    Data {
        key: K,
        label: String,
        width: Option<u16>,
    },
    /// Synthetic trailing column holding the show/hide details button.
    DetailsToggle,
}

/// What a column renders for one row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Value(Cell),
    Toggle { expanded: bool, label: &'static str },
}

impl<K> ColumnDef<K> {
    /// Column id; `None` for the toggle column, which cannot be sorted.
    pub fn id(&self) -> Option<&K> {
        match self {
            ColumnDef::Data { key, .. } => Some(key),
            ColumnDef::DetailsToggle => None,
        }
    }

    pub fn header(&self) -> &str {
        match self {
            ColumnDef::Data { label, .. } => label,
            ColumnDef::DetailsToggle => DETAILS_HEADER,
        }
    }

    pub fn width(&self) -> Option<u16> {
        match self {
            ColumnDef::Data { width, .. } => *width,
            ColumnDef::DetailsToggle => Some(DETAILS_WIDTH),
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self, ColumnDef::DetailsToggle)
    }

    pub fn render_cell<R>(&self, row: &R, expanded: bool) -> CellContent
    where
        R: RowRecord<Key = K>,
    {
        match self {
            ColumnDef::Data { key, .. } => CellContent::Value(row.cell(key)),
            ColumnDef::DetailsToggle => CellContent::Toggle {
                expanded,
                label: toggle_label(expanded),
            },
        }
    }
}

/// Builds column definitions in descriptor order.
///
/// Duplicate keys are a caller error. They never panic: the later
/// descriptor overwrites the label and width of the earlier one, which
/// keeps its position.
pub fn build_columns<K>(descriptors: &[ColumnDescriptor<K>], show_details: bool) -> Vec<ColumnDef<K>>
where
    K: Clone + PartialEq + Debug,
{
    let mut columns: Vec<ColumnDef<K>> = Vec::with_capacity(descriptors.len() + 1);

    for descriptor in descriptors {
        let existing = columns
            .iter()
            .position(|column| column.id() == Some(&descriptor.key));

        match existing {
            Some(index) => {
                log::warn!("duplicate column key {:?}, keeping the last label", descriptor.key);
                if let ColumnDef::Data { label, width, .. } = &mut columns[index] {
                    *label = descriptor.label.clone();
                    *width = descriptor.width;
                }
            }
            None => columns.push(ColumnDef::Data {
                key: descriptor.key.clone(),
                label: descriptor.label.clone(),
                width: descriptor.width,
            }),
        }
    }

    if show_details {
        columns.push(ColumnDef::DetailsToggle);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use lims_proto::prelude::JsonRecord;
    use serde_json::json;

    fn descriptors(pairs: &[(&str, &str)]) -> Vec<ColumnDescriptor> {
        pairs
            .iter()
            .map(|(k, l)| ColumnDescriptor::new(k.to_string(), *l))
            .collect()
    }

    #[test]
    fn test_order_and_toggle_column() {
        let columns = build_columns(&descriptors(&[("name", "Name"), ("code", "Code")]), true);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].header(), "Name");
        assert_eq!(columns[1].id(), Some(&"code".to_string()));
        assert!(columns[2].is_toggle());
        assert_eq!(columns[2].id(), None);
    }

    #[test]
    fn test_no_toggle_without_details() {
        let columns = build_columns(&descriptors(&[("name", "Name")]), false);
        assert!(columns.iter().all(|c| !c.is_toggle()));
    }

    #[test]
    fn test_duplicate_keys_last_label_wins() {
        let columns = build_columns(
            &descriptors(&[("name", "Name"), ("code", "Code"), ("name", "Full name")]),
            false,
        );
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].header(), "Full name");
        assert_eq!(columns[1].header(), "Code");
    }

    #[test]
    fn test_render_cell_is_verbatim() {
        let row = JsonRecord::try_from(json!({"id": 1, "amount": 1250.5})).unwrap();
        let columns = build_columns(&descriptors(&[("amount", "Amount")]), true);

        assert_eq!(
            columns[0].render_cell(&row, false),
            CellContent::Value(Cell::Float(1250.5))
        );
        assert_eq!(
            columns[1].render_cell(&row, false),
            CellContent::Toggle {
                expanded: false,
                label: "Show"
            }
        );
        assert_eq!(
            columns[1].render_cell(&row, true),
            CellContent::Toggle {
                expanded: true,
                label: "Hide"
            }
        );
    }

    #[test]
    fn test_width_hint() {
        let columns = build_columns(
            &[ColumnDescriptor::new("id".to_string(), "ID").width(6)],
            true,
        );
        assert_eq!(columns[0].width(), Some(6));
        assert_eq!(columns[1].width(), Some(8));
    }
}
