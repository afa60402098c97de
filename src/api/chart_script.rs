use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ChartType, ElementId, Options};
use crate::js::{DATA_TABLE_VARIABLE, js_parameters, quote};

use super::html::{button, chart_div, script_tag};
use super::naming::{
    chart_function_name, editor_variable_name, load_call, open_editor_function_name,
    query_response_function_name, wrapper_variable_name,
};
use super::view::{partition_view, take_view};
use super::{ScriptConfig, TableScript};

pub const CHART_EDITOR_PACKAGE: &str = "charteditor";

/// Where a chart's rows come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartData {
    /// Rows embedded in the script from the owned table.
    Table,
    /// Rows fetched at render time by querying a spreadsheet URL.
    Spreadsheet { url: String },
}

/// Runtime event hook attached after the chart object is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listener {
    pub event: String,
    /// JS expression evaluating to the handler, emitted verbatim.
    pub callback: String,
}

/// Generates scripts drawing a Google chart, either from an embedded table
/// (through a `ChartWrapper`), from a spreadsheet query, or inside the
/// interactive chart editor.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScript {
    chart_type: ChartType,
    table: TableScript,
    options: Options,
    data: ChartData,
    listeners: Vec<Listener>,
    config: ScriptConfig,
}

impl ChartScript {
    #[must_use]
    pub fn new(chart_type: ChartType, table: TableScript, options: Options) -> Self {
        Self {
            chart_type,
            config: table.config().clone(),
            table,
            options,
            data: ChartData::Table,
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub fn spreadsheet(chart_type: ChartType, url: impl Into<String>, options: Options) -> Self {
        Self {
            data: ChartData::Spreadsheet { url: url.into() },
            ..Self::new(chart_type, TableScript::default(), options)
        }
    }

    /// Applies `config` to this chart and its table.
    #[must_use]
    pub fn with_config(mut self, config: ScriptConfig) -> Self {
        self.table = self.table.with_config(config.clone());
        self.config = config;
        self
    }

    pub fn add_listener(&mut self, event: impl Into<String>, callback: impl Into<String>) {
        self.listeners.push(Listener {
            event: event.into(),
            callback: callback.into(),
        });
    }

    #[must_use]
    pub fn chart_type(&self) -> &ChartType {
        &self.chart_type
    }

    #[must_use]
    pub fn table(&self) -> &TableScript {
        &self.table
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[must_use]
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    #[must_use]
    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    #[must_use]
    pub fn function_name(&self, element_id: &ElementId) -> String {
        chart_function_name(element_id)
    }

    /// Removes `view` from the options and returns its JS literal, or `''`
    /// when there is none. A second call therefore returns `''`.
    ///
    /// Generation never calls this; it reads the view through
    /// [`partition_view`] and leaves the options intact.
    pub fn extract_view_option(&mut self) -> String {
        take_view(&mut self.options)
    }

    #[must_use]
    pub fn load_script(&self, element_id: &ElementId) -> String {
        load_call(
            &self.config,
            &self.chart_type.package,
            &self.function_name(element_id),
        )
    }

    #[must_use]
    pub fn load_chart_editor_script(&self, element_id: &ElementId) -> String {
        load_call(
            &self.config,
            CHART_EDITOR_PACKAGE,
            &self.function_name(element_id),
        )
    }

    /// Draw function building a `ChartWrapper` around the embedded table.
    #[must_use]
    pub fn draw_chart_wrapper_script(&self, element_id: &ElementId) -> String {
        let wrapper = wrapper_variable_name(element_id);
        let mut js = format!("\n  var {wrapper} = null;");
        js.push_str(&format!("\n  function {}() {{", self.function_name(element_id)));
        js.push_str(&self.wrapper_construction(element_id));
        js.push_str(&self.listener_script(&wrapper));
        js.push_str(&format!("\n    {wrapper}.draw();"));
        js.push_str("\n  };");
        js
    }

    /// Query function for `url` plus a response handler drawing the concrete
    /// chart class; the handler name is derived from `element_id`.
    #[must_use]
    pub fn draw_spreadsheet_script(&self, url: &str, element_id: &ElementId) -> String {
        let handler = query_response_function_name(element_id);
        let (_, options) = partition_view(&self.options);
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
        js.push_str(&format!(
            "\n    var chart = new {}(document.getElementById({}));",
            self.chart_type.class_path(),
            quote(element_id.as_str())
        ));
        js.push_str(&self.listener_script("chart"));
        js.push_str(&format!(
            "\n    chart.draw({DATA_TABLE_VARIABLE}, {});",
            js_parameters(&options)
        ));
        js.push_str("\n  };");
        js
    }

    /// Draw function for the editor path: draws the wrapper and prepares a
    /// `ChartEditor` whose `ok` event redraws the edited chart in place.
    #[must_use]
    pub fn draw_chart_editor_script(&self, element_id: &ElementId) -> String {
        let wrapper = wrapper_variable_name(element_id);
        let editor = editor_variable_name(element_id);
        let container = quote(element_id.as_str());
        let mut js = format!("\n  var {wrapper} = null;");
        js.push_str(&format!("\n  var {editor} = null;"));
        js.push_str(&format!("\n  function {}() {{", self.function_name(element_id)));
        js.push_str(&self.wrapper_construction(element_id));
        js.push_str(&format!(
            "\n    {editor} = new google.visualization.ChartEditor();"
        ));
        js.push_str(&format!(
            "\n    google.visualization.events.addListener({editor}, 'ok', function() {{"
        ));
        js.push_str(&format!("\n      {wrapper} = {editor}.getChartWrapper();"));
        js.push_str(&format!(
            "\n      {wrapper}.draw(document.getElementById({container}));"
        ));
        js.push_str("\n    });");
        js.push_str(&self.listener_script(&wrapper));
        js.push_str(&format!("\n    {wrapper}.draw();"));
        js.push_str("\n  };");
        js.push_str(&format!(
            "\n  function {}() {{",
            open_editor_function_name(element_id)
        ));
        js.push_str(&format!("\n    {editor}.openDialog({wrapper}, {{}});"));
        js.push_str("\n  };");
        js
    }

    /// Complete `<script>` block for the configured data source.
    #[must_use]
    pub fn full_script(&self, element_id: Option<&str>) -> String {
        let element_id = ElementId::or_generate(element_id);
        self.full_script_for(&element_id)
    }

    /// Complete `<script>` block for the chart editor path.
    ///
    /// The editor always works on the embedded table; spreadsheet-backed
    /// charts fall back to it.
    #[must_use]
    pub fn full_script_chart_editor(&self, element_id: Option<&str>) -> String {
        let element_id = ElementId::or_generate(element_id);
        self.full_script_chart_editor_for(&element_id)
    }

    #[must_use]
    pub fn to_html(&self, element_id: Option<&str>) -> String {
        let element_id = ElementId::or_generate(element_id);
        chart_div(&element_id, &self.full_script_for(&element_id))
    }

    /// Container `div`, an `Edit` button opening the editor, and the script.
    #[must_use]
    pub fn to_html_chart_editor(&self, element_id: Option<&str>) -> String {
        let element_id = ElementId::or_generate(element_id);
        format!(
            "{}{}",
            button("Edit", &open_editor_function_name(&element_id)),
            chart_div(&element_id, &self.full_script_chart_editor_for(&element_id))
        )
    }

    fn full_script_for(&self, element_id: &ElementId) -> String {
        match &self.data {
            ChartData::Table => {
                debug!(
                    element_id = %element_id,
                    chart = %self.chart_type.name,
                    "generate chart wrapper script"
                );
                script_tag(&format!(
                    "{}{}",
                    self.load_script(element_id),
                    self.draw_chart_wrapper_script(element_id)
                ))
            }
            ChartData::Spreadsheet { url } => {
                debug!(
                    element_id = %element_id,
                    chart = %self.chart_type.name,
                    url = %url,
                    "generate spreadsheet chart script"
                );
                script_tag(&format!(
                    "{}{}",
                    self.load_script(element_id),
                    self.draw_spreadsheet_script(url, element_id)
                ))
            }
        }
    }

    fn full_script_chart_editor_for(&self, element_id: &ElementId) -> String {
        if let ChartData::Spreadsheet { url } = &self.data {
            warn!(
                element_id = %element_id,
                url = %url,
                "chart editor does not query spreadsheets; drawing the embedded table"
            );
        }
        debug!(
            element_id = %element_id,
            chart = %self.chart_type.name,
            "generate chart editor script"
        );
        script_tag(&format!(
            "{}{}",
            self.load_chart_editor_script(element_id),
            self.draw_chart_editor_script(element_id)
        ))
    }

    fn wrapper_construction(&self, element_id: &ElementId) -> String {
        let wrapper = wrapper_variable_name(element_id);
        let (view, options) = partition_view(&self.options);
        let mut js = format!("\n    {}", self.table.table().to_js());
        js.push_str(&format!(
            "\n    {wrapper} = new google.visualization.ChartWrapper({{"
        ));
        js.push_str(&format!("\n      chartType: {},", quote(&self.chart_type.name)));
        js.push_str(&format!("\n      dataTable: {DATA_TABLE_VARIABLE},"));
        js.push_str(&format!("\n      options: {},", js_parameters(&options)));
        js.push_str(&format!(
            "\n      containerId: {},",
            quote(element_id.as_str())
        ));
        js.push_str(&format!("\n      view: {view}"));
        js.push_str("\n    });");
        js
    }

    fn listener_script(&self, target: &str) -> String {
        self.listeners
            .iter()
            .map(|listener| {
                format!(
                    "\n    google.visualization.events.addListener({target}, {}, {});",
                    quote(&listener.event),
                    listener.callback
                )
            })
            .collect()
    }
}
