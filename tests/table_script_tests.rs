use gviz_script::api::ScriptConfig;
use gviz_script::core::{ElementId, options_from_json};
use gviz_script::TableScript;
use serde_json::json;

fn sample_table() -> TableScript {
    TableScript::new(options_from_json(json!({
        "cols": [
            {"type": "string", "label": "Name"},
            {"type": "number", "label": "Salary"}
        ],
        "rows": [
            {"c": ["Mike", {"v": 10000, "f": "$10,000"}]},
            {"c": ["Jim", 8000]}
        ],
        "page": "enable",
        "pageSize": 10
    })))
}

#[test]
fn construction_strips_table_keys_from_display_options() {
    let table = sample_table();
    assert_eq!(table.table().row_count(), 2);
    assert_eq!(
        table.options().keys().collect::<Vec<_>>(),
        vec!["page", "pageSize"]
    );
}

#[test]
fn function_name_replaces_hyphens() {
    let table = TableScript::default();
    let id = ElementId::from("my-table-1");
    assert_eq!(table.function_name(&id), "draw_my_table_1");
    assert_eq!(table.function_name(&id), table.function_name(&id));
}

#[test]
fn load_script_uses_table_package_and_fixed_version() {
    let js = TableScript::default().load_script(&ElementId::from("t"));
    assert_eq!(
        js,
        "\n  google.load('visualization', '1.0', {packages: ['table'], callback: draw_t});"
    );
}

#[test]
fn draw_script_embeds_table_and_options() {
    let js = sample_table().draw_script(&ElementId::from("t-1"));
    assert!(js.starts_with("\n  function draw_t_1() {"));
    assert!(js.contains("data_table.addRow([{v: 'Mike'}, {v: 10000, f: '$10,000'}]);"));
    assert!(js.contains(
        "var table = new google.visualization.Table(document.getElementById('t-1'));"
    ));
    assert!(js.contains("table.draw(data_table, {page: 'enable', pageSize: 10});"));
    assert!(js.ends_with("\n  };"));
}

#[test]
fn full_script_names_draw_function_exactly_twice() {
    let js = sample_table().full_script(Some("mychart"));
    assert_eq!(js.matches("draw_mychart").count(), 2);
    assert!(js.starts_with("\n<script type=\"text/javascript\">"));
    assert!(js.ends_with("\n</script>"));
}

#[test]
fn full_script_generates_id_when_absent() {
    let table = sample_table();
    let first = table.full_script(None);
    let second = table.full_script(None);
    assert_ne!(first, second);
    let callback = first
        .split("callback: ")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("callback name");
    assert!(callback.starts_with("draw_"));
    assert!(!callback.contains('-'));
    assert!(first.contains(&format!("function {callback}()")));
}

#[test]
fn spreadsheet_script_queries_and_handles_response_per_element() {
    let table = TableScript::new(options_from_json(json!({"width": 400})));
    let url = "https://docs.google.com/spreadsheets/d/abc/gviz/tq?gid=0";
    let js = table.full_script_for_spreadsheet(url, Some("sheet-a"));

    assert!(js.contains(&format!("var query = new google.visualization.Query('{url}');")));
    assert!(js.contains("query.send(handle_sheet_a_query_response);"));
    assert!(js.contains("function handle_sheet_a_query_response(response) {"));
    assert!(js.contains("var data_table = response.getDataTable();"));
    assert!(js.contains("table.draw(data_table, {width: 400});"));
    assert!(!js.contains("handleQueryResponse"));
    assert!(!js.contains("addColumn"));
}

#[test]
fn two_spreadsheet_tables_do_not_share_handlers() {
    let table = TableScript::default();
    let a = table.draw_spreadsheet_script("u", &ElementId::from("a"));
    let b = table.draw_spreadsheet_script("u", &ElementId::from("b"));
    assert!(a.contains("handle_a_query_response"));
    assert!(!b.contains("handle_a_query_response"));
}

#[test]
fn spreadsheet_url_quotes_are_escaped() {
    let js = TableScript::default()
        .draw_spreadsheet_script("x'); alert(1); ('", &ElementId::from("e"));
    assert!(js.contains("Query('x\\'); alert(1); (\\'')"));
}

#[test]
fn config_version_and_language_flow_into_load_call() {
    let config = ScriptConfig::default()
        .with_runtime_version("current")
        .with_language("de");
    let js = TableScript::default()
        .with_config(config)
        .load_script(&ElementId::from("t"));
    assert!(js.contains(
        "google.load('visualization', 'current', {packages: ['table'], language: 'de', callback: draw_t});"
    ));
}

#[test]
fn to_html_places_container_before_script() {
    let html = sample_table().to_html(Some("salaries"));
    assert!(html.starts_with("<div id='salaries'></div>\n<script"));
    assert!(html.contains("document.getElementById('salaries')"));
}
