use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtoError {
    #[error("wrong cell type: expected {expected}, found {found}")]
    WrongCellType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("row record has no usable `id` field: {0}")]
    MissingRowId(String),

    #[error("row record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid column spec `{0}`, expected KEY or KEY:LABEL")]
    InvalidColumnSpec(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ProtoError {
    fn from(err: serde_json::Error) -> Self {
        ProtoError::Json(err.to_string())
    }
}
