use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ProtoError;

/// Caller-facing description of one table column: which row field to show
/// and the header text above it. List order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor<K = String> {
    pub key: K,
    #[serde(default)]
    pub label: String,
    /// Fixed display width hint, in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
}

impl<K> ColumnDescriptor<K> {
    pub fn new(key: K, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            width: None,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }
}

/// Parses `KEY` or `KEY:LABEL`, as typed on a command line.
impl FromStr for ColumnDescriptor<String> {
    type Err = ProtoError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (key, label) = match spec.split_once(':') {
            Some((key, label)) => (key.trim(), label.trim()),
            None => (spec.trim(), spec.trim()),
        };
        if key.is_empty() {
            return Err(ProtoError::InvalidColumnSpec(spec.to_string()));
        }
        Ok(ColumnDescriptor::new(key.to_string(), label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_and_label() {
        let column: ColumnDescriptor = "deptName:Department".parse().unwrap();
        assert_eq!(column.key, "deptName");
        assert_eq!(column.label, "Department");
    }

    #[test]
    fn test_parse_key_only() {
        let column: ColumnDescriptor = "code".parse().unwrap();
        assert_eq!(column, ColumnDescriptor::new("code".to_string(), "code"));
    }

    #[test]
    fn test_parse_rejects_empty_key() {
        assert!(matches!(
            ":Label".parse::<ColumnDescriptor>(),
            Err(ProtoError::InvalidColumnSpec(_))
        ));
    }

    #[test]
    fn test_missing_label_deserializes_blank() {
        let column: ColumnDescriptor = serde_json::from_str(r#"{"key": "id"}"#).unwrap();
        assert_eq!(column.label, "");
        assert_eq!(column.width, None);
    }
}
