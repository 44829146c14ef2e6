use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a row's detail panel, e.g. a single investigation ordered
/// for a patient together with its processing status.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Clone)]
pub struct DetailRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

const NAME_KEYS: [&str; 4] = ["name", "testName", "title", "label"];

impl DetailRecord {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Builds a sub-record from a loosely shaped JSON object. The first of
    /// `name`, `testName`, `title`, `label` becomes the name, `status` the
    /// badge text; every other scalar is kept as an extra field.
    pub fn from_json_object(object: &serde_json::Map<String, Value>) -> Self {
        let name_key = NAME_KEYS.iter().find(|k| object.contains_key(**k)).copied();
        let mut record = DetailRecord::default();

        for (key, value) in object {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => continue,
                other => other.to_string(),
            };
            if Some(key.as_str()) == name_key {
                record.name = text;
            } else if key == "status" {
                record.status = text;
            } else {
                record.fields.insert(key.clone(), text);
            }
        }
        record
    }
}
