pub mod badge;
pub mod common;
pub mod data_table;
pub mod layout;
pub mod pagination;
