use lims_proto::prelude::{Cell, RowRecord, SortDirection, Sorter};

/// Applies a header click to the current sort: the active column flips
/// direction, any other column becomes active ascending.
pub fn toggle<K: PartialEq>(current: Option<Sorter<K>>, column: K) -> Sorter<K> {
    match current {
        Some(active) if active.column == column => Sorter {
            column,
            direction: active.direction.flipped(),
        },
        _ => Sorter::asc(column),
    }
}

/// Returns `rows` ordered by `sorter`, keeping the input order of rows whose
/// sort values compare equal, in both directions.
pub fn sorted<'a, R: RowRecord>(rows: &'a [R], sorter: Option<&Sorter<R::Key>>) -> Vec<&'a R> {
    let Some(sorter) = sorter else {
        return rows.iter().collect();
    };

    let mut keyed: Vec<(Cell, &R)> = rows.iter().map(|row| (row.cell(&sorter.column), row)).collect();
    keyed.sort_by(|(a, _), (b, _)| match sorter.direction {
        SortDirection::Asc => a.compare(b),
        SortDirection::Desc => b.compare(a),
    });
    keyed.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lims_proto::prelude::JsonRecord;
    use serde_json::json;

    fn rows() -> Vec<JsonRecord> {
        [
            json!({"id": 1, "dept": "Serology", "beds": 4}),
            json!({"id": 2, "dept": "Biochemistry", "beds": 12}),
            json!({"id": 3, "dept": "Hematology", "beds": 4}),
            json!({"id": 4, "dept": "Microbiology", "beds": 9}),
        ]
        .into_iter()
        .map(|v| JsonRecord::try_from(v).unwrap())
        .collect()
    }

    fn ids(rows: &[&JsonRecord]) -> Vec<String> {
        rows.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_toggle_same_column_flips() {
        let first = toggle(None, "dept");
        assert_eq!(first, Sorter::asc("dept"));
        let second = toggle(Some(first), "dept");
        assert_eq!(second, Sorter::desc("dept"));
        let third = toggle(Some(second), "dept");
        assert_eq!(third, Sorter::asc("dept"));
    }

    #[test]
    fn test_toggle_other_column_restarts_ascending() {
        let sorter = toggle(Some(Sorter::desc("dept")), "beds");
        assert_eq!(sorter, Sorter::asc("beds"));
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let rows = rows();
        assert_eq!(ids(&sorted(&rows, None)), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_numeric_sort_is_stable_both_ways() {
        let rows = rows();
        let asc = sorted(&rows, Some(&Sorter::asc("beds".to_string())));
        assert_eq!(ids(&asc), ["1", "3", "4", "2"]);

        let desc = sorted(&rows, Some(&Sorter::desc("beds".to_string())));
        assert_eq!(ids(&desc), ["2", "4", "1", "3"]);
    }

    #[test]
    fn test_text_sort() {
        let rows = rows();
        let asc = sorted(&rows, Some(&Sorter::asc("dept".to_string())));
        assert_eq!(asc[0].cell(&"dept".to_string()), Cell::Text("Biochemistry".into()));
        assert_eq!(ids(&asc), ["2", "3", "4", "1"]);
    }
}
