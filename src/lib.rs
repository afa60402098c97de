//! gviz-script: JavaScript generation for Google Charts.
//!
//! Given a data table and an options bag, the generators in [`api`] emit
//! `<script>` blocks that load the Google Visualization runtime and draw a
//! table, a chart, or the interactive chart editor into a DOM element.
//! Nothing is validated against the runtime; generated scripts fail, if at
//! all, in the browser.

pub mod api;
pub mod core;
pub mod error;
pub mod js;
pub mod telemetry;

pub use api::{ChartScript, ScriptConfig, TableScript};
pub use error::{ScriptError, ScriptResult};
