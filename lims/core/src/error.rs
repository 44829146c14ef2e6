use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("page window must show at least one page")]
    ZeroPageWindow,

    #[error("invalid value `{value}` for {key}")]
    InvalidSetting { key: String, value: String },

    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Config(err.to_string())
    }
}
