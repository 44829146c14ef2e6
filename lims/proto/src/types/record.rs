use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::cell::Cell;
use super::detail::DetailRecord;
use super::error::ProtoError;

/// Trait for rows that can be displayed in a data table.
///
/// # Example
///
/// ```
/// use lims_proto::prelude::*;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum DepartmentField {
///     Name,
///     Code,
/// }
///
/// struct Department {
///     id: u32,
///     name: String,
///     code: String,
/// }
///
/// impl RowRecord for Department {
///     type Id = u32;
///     type Key = DepartmentField;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn cell(&self, key: &DepartmentField) -> Cell {
///         match key {
///             DepartmentField::Name => Cell::from(self.name.as_str()),
///             DepartmentField::Code => Cell::from(self.code.as_str()),
///         }
///     }
/// }
/// ```
pub trait RowRecord {
    /// Stable identifier, used to track expanded rows and as render key.
    type Id: Clone + Eq + Hash + Debug + ToString + 'static;

    /// Column key type. Typed records use a field enum so that columns and
    /// rows cannot disagree about which fields exist.
    type Key: Clone + PartialEq + Debug + 'static;

    fn id(&self) -> Self::Id;

    /// The value shown under column `key`.
    fn cell(&self, key: &Self::Key) -> Cell;

    /// Sub-records shown when the row is expanded.
    fn details(&self) -> Vec<DetailRecord> {
        Vec::new()
    }
}

/// An untyped row backed by a JSON object, keyed by field name.
///
/// The `id` field is mandatory and may be a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct JsonRecord {
    id: String,
    fields: Map<String, Value>,
}

impl JsonRecord {
    pub fn from_object(fields: Map<String, Value>) -> Result<Self, ProtoError> {
        let id = match fields.get("id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => return Err(ProtoError::MissingRowId(other.to_string())),
            None => return Err(ProtoError::MissingRowId("field is absent".to_string())),
        };
        Ok(Self { id, fields })
    }

    /// Parses a JSON array of objects into rows.
    pub fn parse_rows(json: &str) -> Result<Vec<JsonRecord>, ProtoError> {
        let rows: Vec<JsonRecord> = serde_json::from_str(json)?;
        Ok(rows)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl TryFrom<Value> for JsonRecord {
    type Error = ProtoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => JsonRecord::from_object(fields),
            Value::Null => Err(ProtoError::NotAnObject("null")),
            Value::Bool(_) => Err(ProtoError::NotAnObject("bool")),
            Value::Number(_) => Err(ProtoError::NotAnObject("number")),
            Value::String(_) => Err(ProtoError::NotAnObject("string")),
            Value::Array(_) => Err(ProtoError::NotAnObject("array")),
        }
    }
}

impl From<JsonRecord> for Value {
    fn from(record: JsonRecord) -> Self {
        Value::Object(record.fields)
    }
}

impl RowRecord for JsonRecord {
    type Id = String;
    type Key = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn cell(&self, key: &String) -> Cell {
        self.fields.get(key).map(Cell::from).unwrap_or_default()
    }

    /// The first field holding a list of objects.
    fn details(&self) -> Vec<DetailRecord> {
        self.fields
            .values()
            .find_map(|value| match Cell::from(value) {
                Cell::Records(records) => Some(records),
                _ => None,
            })
            .unwrap_or_default()
    }
}
