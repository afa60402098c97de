use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde_json::Value;
use tracing::debug;

use crate::core::{Cell, Column, ColumnType, DataTable};

use super::literal::{quote, typecast};

/// Name of the JS variable the serialized table is bound to.
pub const DATA_TABLE_VARIABLE: &str = "data_table";

impl DataTable {
    /// Statements that rebuild this table as a `google.visualization.DataTable`
    /// bound to `data_table`.
    #[must_use]
    pub fn to_js(&self) -> String {
        let mut js = format!("var {DATA_TABLE_VARIABLE} = new google.visualization.DataTable();");
        for column in self.columns() {
            js.push_str(&format!(
                "{DATA_TABLE_VARIABLE}.addColumn({});",
                column_literal(column)
            ));
        }
        for row in self.rows() {
            let cells: Vec<String> = row
                .iter()
                .zip(self.columns())
                .map(|(cell, column)| cell_literal(cell, column.column_type))
                .collect();
            js.push_str(&format!(
                "{DATA_TABLE_VARIABLE}.addRow([{}]);",
                cells.join(", ")
            ));
        }
        js
    }
}

fn column_literal(column: &Column) -> String {
    let mut parts = vec![format!("type: {}", quote(column.column_type.as_str()))];
    if let Some(label) = &column.label {
        parts.push(format!("label: {}", quote(label)));
    }
    if let Some(id) = &column.id {
        parts.push(format!("id: {}", quote(id)));
    }
    if let Some(role) = &column.role {
        parts.push(format!("role: {}", quote(role)));
    }
    if let Some(pattern) = &column.pattern {
        parts.push(format!("pattern: {}", quote(pattern)));
    }
    format!("{{{}}}", parts.join(", "))
}

fn cell_literal(cell: &Cell, column_type: ColumnType) -> String {
    if cell.value.is_null() && cell.formatted.is_none() && cell.properties.is_none() {
        return "null".to_owned();
    }
    let value = match (&cell.value, column_type) {
        (Value::String(raw), ColumnType::Date) => date_literal(raw),
        (Value::String(raw), ColumnType::Datetime) => datetime_literal(raw),
        (other, _) => typecast(other),
    };
    let mut parts = vec![format!("v: {value}")];
    if let Some(formatted) = &cell.formatted {
        parts.push(format!("f: {}", quote(formatted)));
    }
    if let Some(properties) = &cell.properties {
        parts.push(format!("p: {}", typecast(&Value::Object(properties.clone()))));
    }
    format!("{{{}}}", parts.join(", "))
}

fn date_literal(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => format!(
            "new Date({}, {}, {})",
            date.year(),
            date.month0(),
            date.day()
        ),
        Err(e) => {
            debug!(value = raw, error = %e, "date cell forwarded as string");
            quote(raw)
        }
    }
}

fn datetime_literal(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"));
    match parsed {
        Ok(dt) => format!(
            "new Date({}, {}, {}, {}, {}, {})",
            dt.year(),
            dt.month0(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        ),
        Err(e) => {
            debug!(value = raw, error = %e, "datetime cell forwarded as string");
            quote(raw)
        }
    }
}
