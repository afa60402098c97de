//! Script generators and the naming/config helpers they share.

mod chart_script;
pub mod html;
pub mod naming;
mod script_config;
mod table_script;
pub mod view;

pub use chart_script::{CHART_EDITOR_PACKAGE, ChartData, ChartScript, Listener};
pub use script_config::{DEFAULT_RUNTIME_VERSION, ScriptConfig};
pub use table_script::{TABLE_PACKAGE, TableScript};
pub use view::{EMPTY_VIEW, partition_view};
