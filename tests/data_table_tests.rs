use gviz_script::ScriptError;
use gviz_script::core::{Cell, Column, ColumnType, DataTable, options_from_json};
use serde_json::json;

#[test]
fn empty_options_produce_empty_table() {
    let table = DataTable::from_options(&options_from_json(json!({})));
    assert_eq!(table.column_count(), 0);
    assert_eq!(table.row_count(), 0);
    assert!(table.is_empty());
}

#[test]
fn cols_and_rows_build_aligned_table() {
    let options = options_from_json(json!({
        "cols": [
            {"type": "string", "label": "Year"},
            {"type": "number", "label": "Sales"}
        ],
        "rows": [
            {"c": ["2013", 1000]},
            {"c": ["2014", {"v": 1170, "f": "1.17k"}]}
        ]
    }));
    let table = DataTable::from_options(&options);

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.columns()[0].column_type, ColumnType::String);
    assert_eq!(table.columns()[1].label.as_deref(), Some("Sales"));
    assert_eq!(table.rows()[0], vec![Cell::new("2013"), Cell::new(1000)]);
    assert_eq!(
        table.rows()[1],
        vec![Cell::new("2014"), Cell::new(1170).with_formatted("1.17k")]
    );
}

#[test]
fn rows_without_cols_are_skipped() {
    let options = options_from_json(json!({"rows": [{"c": [1, 2]}]}));
    let table = DataTable::from_options(&options);
    assert_eq!(table.column_count(), 0);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn misaligned_rows_are_skipped_and_aligned_rows_kept() {
    let options = options_from_json(json!({
        "cols": [{"type": "number"}, {"type": "number"}],
        "rows": [{"c": [1]}, {"c": [1, 2]}, "garbage", [3, 4]]
    }));
    let table = DataTable::from_options(&options);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[1], vec![Cell::new(3), Cell::new(4)]);
}

#[test]
fn add_row_rejects_length_mismatch() {
    let mut table = DataTable::new();
    table.new_columns([
        Column::new(ColumnType::String).with_label("Task"),
        Column::new(ColumnType::Number).with_id("hours"),
    ]);

    let err = table
        .add_row(vec![Cell::new("Work")])
        .expect_err("short row must be rejected");
    assert!(matches!(
        err,
        ScriptError::RowLength {
            expected: 2,
            actual: 1
        }
    ));

    table
        .add_rows([
            vec![Cell::new("Work"), Cell::new(11)],
            vec![Cell::new("Eat"), Cell::new(2)],
        ])
        .expect("aligned rows");
    assert_eq!(table.row_count(), 2);
}

#[test]
fn to_js_declares_columns_then_rows() {
    let mut table = DataTable::new();
    table.new_column(Column::new(ColumnType::String).with_label("Year"));
    table.new_column(Column::new(ColumnType::Number).with_label("Sales"));
    table
        .add_row(vec![Cell::new("2013"), Cell::new(1000)])
        .expect("row");

    assert_eq!(
        table.to_js(),
        "var data_table = new google.visualization.DataTable();\
         data_table.addColumn({type: 'string', label: 'Year'});\
         data_table.addColumn({type: 'number', label: 'Sales'});\
         data_table.addRow([{v: '2013'}, {v: 1000}]);"
    );
}

#[test]
fn to_js_converts_date_cells() {
    let options = options_from_json(json!({
        "cols": [{"type": "date", "label": "Day"}, {"type": "number"}],
        "rows": [{"c": ["2024-12-31", null]}]
    }));
    let js = DataTable::from_options(&options).to_js();
    assert!(js.contains("data_table.addRow([{v: new Date(2024, 11, 31)}, null]);"));
}

#[test]
fn empty_table_to_js_only_constructs() {
    assert_eq!(
        DataTable::new().to_js(),
        "var data_table = new google.visualization.DataTable();"
    );
}

#[test]
fn new_column_after_rows_pads_existing_rows_with_null() {
    let mut table = DataTable::new();
    table.new_column(Column::new(ColumnType::Number));
    table.add_row(vec![Cell::new(1)]).expect("row");
    table.new_column(Column::new(ColumnType::Number).with_label("Late"));

    assert_eq!(table.column_count(), 2);
    assert!(table.rows().iter().all(|row| row.len() == table.column_count()));
    assert_eq!(table.rows()[0][1], Cell::new(serde_json::Value::Null));
    assert!(table.to_js().ends_with("data_table.addRow([{v: 1}, null]);"));

    table
        .add_row(vec![Cell::new(2), Cell::new(3)])
        .expect("row matches widened table");
}

#[test]
fn role_and_pattern_columns_and_cell_properties_reach_js() {
    let options = options_from_json(json!({
        "cols": [
            {"type": "string", "label": "Year"},
            {"type": "number", "label": "Sales", "pattern": "#,###"},
            {"type": "string", "role": "annotation"}
        ],
        "rows": [
            {"c": ["2013", 1000, {"v": "peak", "p": {"style": "color: red"}}]}
        ]
    }));
    let table = DataTable::from_options(&options);
    assert_eq!(table.columns()[2].role.as_deref(), Some("annotation"));
    assert_eq!(table.columns()[1].pattern.as_deref(), Some("#,###"));

    let js = table.to_js();
    assert!(js.contains("data_table.addColumn({type: 'number', label: 'Sales', pattern: '#,###'});"));
    assert!(js.contains("data_table.addColumn({type: 'string', role: 'annotation'});"));
    assert!(js.contains("{v: 'peak', p: {style: 'color: red'}}"));
}

#[test]
fn builder_role_is_emitted() {
    let mut table = DataTable::new();
    table.new_column(Column::new(ColumnType::String).with_role("tooltip"));
    assert!(table.to_js().contains("addColumn({type: 'string', role: 'tooltip'});"));
}
