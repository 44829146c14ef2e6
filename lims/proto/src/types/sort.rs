use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The active sort column and its direction.
///
/// Deserializes from `{"column": .., "state": "asc"}` as well, the shape
/// used for default sorters in page definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorter<K = String> {
    pub column: K,
    #[serde(default, alias = "state")]
    pub direction: SortDirection,
}

impl<K> Sorter<K> {
    pub fn asc(column: K) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: K) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }
}
