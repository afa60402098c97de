use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::core::Options;
use crate::error::{ScriptError, ScriptResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
    Boolean,
    Date,
    Datetime,
    Timeofday,
}

impl ColumnType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Timeofday => "timeofday",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Column role such as `annotation`, `tooltip` or `interval`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Column {
    #[must_use]
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            column_type,
            label: None,
            id: None,
            role: None,
            pattern: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// One table cell: a raw value, an optional display string and optional
/// per-cell properties (`p`).
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: Value,
    pub formatted: Option<String>,
    pub properties: Option<Map<String, Value>>,
}

impl Cell {
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            formatted: None,
            properties: None,
        }
    }

    #[must_use]
    pub fn with_formatted(mut self, formatted: impl Into<String>) -> Self {
        self.formatted = Some(formatted.into());
        self
    }

    #[must_use]
    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Accepts either a bare value or the `{v: ..., f: ..., p: {...}}` object form.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        if let Value::Object(map) = value {
            if let Some(v) = map.get("v") {
                return Self {
                    value: v.clone(),
                    formatted: map.get("f").and_then(Value::as_str).map(str::to_owned),
                    properties: map.get("p").and_then(Value::as_object).cloned(),
                };
            }
        }
        Self::new(value.clone())
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Rectangular table of typed columns and aligned rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `cols` and `rows` from an options bag.
    ///
    /// Missing keys leave the table empty. Malformed column definitions and
    /// rows that do not line up with the columns are skipped.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let mut table = Self::new();

        if let Some(cols) = options.get("cols").and_then(Value::as_array) {
            for (index, raw) in cols.iter().enumerate() {
                match serde_json::from_value::<Column>(raw.clone()) {
                    Ok(column) => table.new_column(column),
                    Err(e) => warn!(index, error = %e, "skipping malformed column definition"),
                }
            }
        }

        if let Some(rows) = options.get("rows").and_then(Value::as_array) {
            for (index, raw) in rows.iter().enumerate() {
                let Some(cells) = row_cells(raw) else {
                    warn!(index, "skipping row without a cell sequence");
                    continue;
                };
                let cells = cells.iter().map(Cell::from_json).collect();
                if let Err(e) = table.add_row(cells) {
                    warn!(index, error = %e, "skipping misaligned row");
                }
            }
        }

        table
    }

    /// Appends a column. Rows already in the table get a `null` cell for it.
    pub fn new_column(&mut self, column: Column) {
        trace!(count = self.columns.len() + 1, "add column");
        self.columns.push(column);
        for row in &mut self.rows {
            row.push(Cell::new(Value::Null));
        }
    }

    pub fn new_columns(&mut self, columns: impl IntoIterator<Item = Column>) {
        for column in columns {
            self.new_column(column);
        }
    }

    pub fn add_row(&mut self, cells: Vec<Cell>) -> ScriptResult<()> {
        if cells.len() != self.columns.len() {
            return Err(ScriptError::RowLength {
                expected: self.columns.len(),
                actual: cells.len(),
            });
        }
        trace!(count = self.rows.len() + 1, "add row");
        self.rows.push(cells);
        Ok(())
    }

    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = Vec<Cell>>) -> ScriptResult<()> {
        for row in rows {
            self.add_row(row)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}

fn row_cells(raw: &Value) -> Option<&Vec<Value>> {
    match raw {
        Value::Object(map) => map.get("c").and_then(Value::as_array),
        Value::Array(cells) => Some(cells),
        _ => None,
    }
}
