//! JS literal serialization for options bags and data tables.

pub mod data_table;
pub mod literal;

pub use data_table::DATA_TABLE_VARIABLE;
pub use literal::{js_parameters, quote, typecast};
