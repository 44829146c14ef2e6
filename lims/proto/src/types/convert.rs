//! Conversions into and out of [`Cell`].

use serde_json::Value;

use super::cell::Cell;
use super::detail::DetailRecord;
use super::error::ProtoError;

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<Vec<DetailRecord>> for Cell {
    fn from(value: Vec<DetailRecord>) -> Self {
        Cell::Records(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// JSON values map onto cells one to one, except that an array whose
/// elements are all objects becomes a list of sub-records and any other
/// compound value is kept as its JSON text.
impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Nil,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Cell::Int(i),
                None => n.as_f64().map(Cell::Float).unwrap_or_default(),
            },
            Value::String(s) => Cell::Text(s.clone()),
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                Cell::Records(
                    items
                        .iter()
                        .filter_map(Value::as_object)
                        .map(DetailRecord::from_json_object)
                        .collect(),
                )
            }
            other => Cell::Text(other.to_string()),
        }
    }
}

/// Trait for converting a cell to a concrete Rust type.
pub trait FromCell: Sized {
    fn from_cell(cell: &Cell) -> Result<Self, ProtoError>;
}

fn wrong(expected: &'static str, cell: &Cell) -> ProtoError {
    ProtoError::WrongCellType {
        expected,
        found: cell.type_name(),
    }
}

impl FromCell for String {
    fn from_cell(cell: &Cell) -> Result<Self, ProtoError> {
        match cell {
            Cell::Records(_) => Err(wrong("scalar", cell)),
            other => Ok(other.to_string()),
        }
    }
}

impl FromCell for i64 {
    fn from_cell(cell: &Cell) -> Result<Self, ProtoError> {
        match cell {
            Cell::Int(x) => Ok(*x),
            Cell::Text(s) => s.trim().parse().map_err(|_| wrong("int", cell)),
            _ => Err(wrong("int", cell)),
        }
    }
}

impl FromCell for f64 {
    fn from_cell(cell: &Cell) -> Result<Self, ProtoError> {
        cell.as_number().ok_or_else(|| wrong("number", cell))
    }
}

impl FromCell for bool {
    fn from_cell(cell: &Cell) -> Result<Self, ProtoError> {
        match cell {
            Cell::Bool(b) => Ok(*b),
            _ => Err(wrong("bool", cell)),
        }
    }
}

impl FromCell for Vec<DetailRecord> {
    fn from_cell(cell: &Cell) -> Result<Self, ProtoError> {
        match cell {
            Cell::Records(records) => Ok(records.clone()),
            Cell::Nil => Ok(Vec::new()),
            _ => Err(wrong("records", cell)),
        }
    }
}

/// Extension trait for convenient cell access.
pub trait CellExt {
    fn try_into<T: FromCell>(&self) -> Result<T, ProtoError>;

    fn as_str(&self) -> Option<&str>;

    fn records(&self) -> &[DetailRecord];
}

impl CellExt for Cell {
    fn try_into<T: FromCell>(&self) -> Result<T, ProtoError> {
        T::from_cell(self)
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn records(&self) -> &[DetailRecord] {
        match self {
            Cell::Records(records) => records,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Cell::from(&json!(null)), Cell::Nil);
        assert_eq!(Cell::from(&json!(12)), Cell::Int(12));
        assert_eq!(Cell::from(&json!(12.5)), Cell::Float(12.5));
        assert_eq!(Cell::from(&json!("Male")), Cell::Text("Male".into()));
    }

    #[test]
    fn test_from_json_compound() {
        assert_eq!(Cell::from(&json!([1, 2])), Cell::Text("[1,2]".into()));
        assert_eq!(Cell::from(&json!([])), Cell::Text("[]".into()));
        let cell = Cell::from(&json!([{"name": "CBC", "status": "Active"}]));
        assert_eq!(cell.records(), &[DetailRecord::new("CBC", "Active")]);
    }

    #[test]
    fn test_from_cell() {
        assert_eq!(CellExt::try_into::<i64>(&Cell::Text("42".into())).unwrap(), 42);
        assert_eq!(CellExt::try_into::<f64>(&Cell::Int(3)).unwrap(), 3.0);
        assert_eq!(
            CellExt::try_into::<bool>(&Cell::Int(1)).unwrap_err(),
            ProtoError::WrongCellType {
                expected: "bool",
                found: "int"
            }
        );
        assert!(CellExt::try_into::<String>(&Cell::Records(vec![])).is_err());
        assert_eq!(Cell::from(None::<i64>), Cell::Nil);
    }
}
