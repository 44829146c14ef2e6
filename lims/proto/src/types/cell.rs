use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::detail::DetailRecord;

/// A displayable value held by one row under one column.
///
/// The table renders cells verbatim; callers format values (currency,
/// dates in a local style, ...) before handing rows over.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Clone)]
#[serde(tag = "type", content = "value")]
pub enum Cell {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Microseconds since the Unix epoch.
    DateTime(u64),
    /// Nested sub-records shown in the detail panel of a row.
    Records(Vec<DetailRecord>),
}

impl Cell {
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Nil => "nil",
            Cell::Bool(_) => "bool",
            Cell::Int(_) => "int",
            Cell::Float(_) => "float",
            Cell::Text(_) => "text",
            Cell::DateTime(_) => "datetime",
            Cell::Records(_) => "records",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Cell::Nil)
    }

    /// Numeric view used for ordering. Text counts as a number when it
    /// parses as one.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Cell::Int(x) => *x as f64,
            Cell::Float(x) => *x,
            Cell::DateTime(x) => *x as f64,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Nil | Cell::Bool(_) | Cell::Records(_) => return None,
        };
        (!value.is_nan()).then_some(value)
    }

    /// Orders two cells: numerically when both sides are numbers,
    /// otherwise by their displayed text. Numbers rank before every
    /// non-number so the order stays total on mixed columns.
    pub fn compare(&self, other: &Cell) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Nil => Ok(()),
            Cell::Bool(x) => f.write_fmt(format_args!("{x}")),
            Cell::Int(x) => f.write_fmt(format_args!("{x}")),
            Cell::Float(x) => f.write_fmt(format_args!("{x}")),
            Cell::Text(x) => f.write_str(x),
            Cell::DateTime(x) => {
                // Out-of-range timestamps print as the raw number.
                match i64::try_from(*x)
                    .ok()
                    .and_then(DateTime::<Utc>::from_timestamp_micros)
                {
                    Some(datetime) => f.write_str(&datetime.to_rfc3339()),
                    None => f.write_fmt(format_args!("{x}")),
                }
            }
            Cell::Records(records) => f.write_fmt(format_args!("{} records", records.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(Cell::Int(9).compare(&Cell::Int(10)), Ordering::Less);
        assert_eq!(
            Cell::Text("9".into()).compare(&Cell::Text("10".into())),
            Ordering::Less
        );
        assert_eq!(Cell::Float(2.5).compare(&Cell::Int(2)), Ordering::Greater);
    }

    #[test]
    fn non_numbers_compare_as_text() {
        assert_eq!(
            Cell::Text("apple".into()).compare(&Cell::Int(10)),
            Ordering::Greater
        );
        assert_eq!(
            Cell::Text("Cardiology".into()).compare(&Cell::Text("Biochemistry".into())),
            Ordering::Greater
        );
    }

    #[test]
    fn nil_displays_blank() {
        assert_eq!(Cell::Nil.to_string(), "");
        assert_eq!(Cell::Nil.compare(&Cell::Text("a".into())), Ordering::Less);
    }

    #[test]
    fn datetime_displays_rfc3339() {
        assert_eq!(Cell::DateTime(0).to_string(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn numbers_rank_before_text() {
        let nine = Cell::Int(9);
        let ten = Cell::Text("10".into());
        let mixed = Cell::Text("1a".into());
        assert_eq!(nine.compare(&ten), Ordering::Less);
        assert_eq!(ten.compare(&mixed), Ordering::Less);
        assert_eq!(nine.compare(&mixed), Ordering::Less);
        assert_eq!(mixed.compare(&nine), Ordering::Greater);
        assert_eq!(
            Cell::Text("<0.5".into()).compare(&Cell::Float(0.4)),
            Ordering::Greater
        );
    }

    #[test]
    fn datetime_out_of_range_displays_raw_value() {
        let cell: Cell =
            serde_json::from_str(r#"{"type":"DateTime","value":18446744073709551615}"#).unwrap();
        assert_eq!(cell.to_string(), "18446744073709551615");
        assert_eq!(
            Cell::DateTime(i64::MAX as u64).to_string(),
            (i64::MAX as u64).to_string()
        );
    }

    #[test]
    fn nan_text_is_not_a_number() {
        assert_eq!(Cell::Text("NaN".into()).as_number(), None);
        assert_eq!(Cell::Text(" 42 ".into()).as_number(), Some(42.0));
    }
}
