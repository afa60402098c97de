pub mod chart_type;
pub mod data_table;
pub mod types;

pub use chart_type::ChartType;
pub use data_table::{Cell, Column, ColumnType, DataTable};
pub use types::{ElementId, Options, options_from_json};
