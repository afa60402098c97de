use tracing::debug;

use crate::core::{DataTable, ElementId, Options};
use crate::js::{DATA_TABLE_VARIABLE, js_parameters, quote};

use super::html::{chart_div, script_tag};
use super::naming::{chart_function_name, load_call, query_response_function_name};
use super::ScriptConfig;

pub const TABLE_PACKAGE: &str = "table";

/// Option keys consumed while building the table; never forwarded as display options.
const TABLE_DATA_KEYS: [&str; 2] = ["cols", "rows"];

/// Generates scripts rendering a `google.visualization.Table` widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableScript {
    table: DataTable,
    options: Options,
    config: ScriptConfig,
}

impl TableScript {
    /// Builds the table from the `cols`/`rows` entries of `options`; every
    /// other entry is kept as a display option.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let table = DataTable::from_options(&options);
        let options = options
            .into_iter()
            .filter(|(key, _)| !TABLE_DATA_KEYS.contains(&key.as_str()))
            .collect();
        Self::from_table(table, options)
    }

    #[must_use]
    pub fn from_table(table: DataTable, options: Options) -> Self {
        Self {
            table,
            options,
            config: ScriptConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ScriptConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn table(&self) -> &DataTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DataTable {
        &mut self.table
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    #[must_use]
    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    #[must_use]
    pub fn function_name(&self, element_id: &ElementId) -> String {
        chart_function_name(element_id)
    }

    #[must_use]
    pub fn load_script(&self, element_id: &ElementId) -> String {
        load_call(&self.config, TABLE_PACKAGE, &self.function_name(element_id))
    }

    #[must_use]
    pub fn draw_script(&self, element_id: &ElementId) -> String {
        let mut js = String::new();
        js.push_str(&format!("\n  function {}() {{", self.function_name(element_id)));
        js.push_str(&format!("\n    {}", self.table.to_js()));
        js.push_str(&table_widget(element_id, "    "));
        js.push_str(&format!(
            "\n    table.draw({DATA_TABLE_VARIABLE}, {});",
            js_parameters(&self.options)
        ));
        js.push_str("\n  };");
        js
    }

    /// Draw function that queries `url` and renders the table once the
    /// response arrives.
    #[must_use]
    pub fn draw_spreadsheet_script(&self, url: &str, element_id: &ElementId) -> String {
        let handler = query_response_function_name(element_id);
        let mut js = String::new();
        js.push_str(&format!("\n  function {}() {{", self.function_name(element_id)));
        js.push_str(&format!(
            "\n    var query = new google.visualization.Query({});",
            quote(url)
        ));
        js.push_str(&format!("\n    query.send({handler});"));
        js.push_str("\n  };");
        js.push_str(&format!("\n  function {handler}(response) {{"));
        js.push_str(&format!(
            "\n    var {DATA_TABLE_VARIABLE} = response.getDataTable();"
        ));
        js.push_str(&table_widget(element_id, "    "));
        js.push_str(&format!(
            "\n    table.draw({DATA_TABLE_VARIABLE}, {});",
            js_parameters(&self.options)
        ));
        js.push_str("\n  };");
        js
    }

    /// Complete `<script>` block; an id is generated when none is given.
    #[must_use]
    pub fn full_script(&self, element_id: Option<&str>) -> String {
        let element_id = ElementId::or_generate(element_id);
        self.full_script_for(&element_id)
    }

    #[must_use]
    pub fn full_script_for_spreadsheet(&self, url: &str, element_id: Option<&str>) -> String {
        let element_id = ElementId::or_generate(element_id);
        debug!(element_id = %element_id, url, "generate spreadsheet table script");
        script_tag(&format!(
            "{}{}",
            self.load_script(&element_id),
            self.draw_spreadsheet_script(url, &element_id)
        ))
    }

    /// Container `div` plus the full script.
    #[must_use]
    pub fn to_html(&self, element_id: Option<&str>) -> String {
        let element_id = ElementId::or_generate(element_id);
        chart_div(&element_id, &self.full_script_for(&element_id))
    }

    fn full_script_for(&self, element_id: &ElementId) -> String {
        debug!(
            element_id = %element_id,
            columns = self.table.column_count(),
            rows = self.table.row_count(),
            "generate table script"
        );
        script_tag(&format!(
            "{}{}",
            self.load_script(element_id),
            self.draw_script(element_id)
        ))
    }
}

fn table_widget(element_id: &ElementId, indent: &str) -> String {
    format!(
        "\n{indent}var table = new google.visualization.Table(document.getElementById({}));",
        quote(element_id.as_str())
    )
}
