use serde_json::{Map, Value};

use crate::core::Options;

/// Serializes an options bag into a JS object literal: `{width: 400, title: 'Sales'}`.
#[must_use]
pub fn js_parameters(options: &Options) -> String {
    object_literal(options.iter())
}

/// Serializes one JSON value into its JS literal form.
#[must_use]
pub fn typecast(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(typecast).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => object_map_literal(map),
    }
}

/// Single-quoted JS string literal.
///
/// `</` is written as `<\/` so a value can never terminate an enclosing
/// `<script>` element.
#[must_use]
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    let mut prev = '\0';
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '/' if prev == '<' => out.push_str("\\/"),
            _ => out.push(ch),
        }
        prev = ch;
    }
    out.push('\'');
    out
}

/// Object key, bare when it is a plain identifier.
#[must_use]
pub fn key(name: &str) -> String {
    if is_identifier(name) {
        name.to_owned()
    } else {
        quote(name)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn object_map_literal(map: &Map<String, Value>) -> String {
    object_literal(map.iter())
}

fn object_literal<'a>(entries: impl Iterator<Item = (&'a String, &'a Value)>) -> String {
    let parts: Vec<String> = entries
        .map(|(k, v)| format!("{}: {}", key(k), typecast(v)))
        .collect();
    format!("{{{}}}", parts.join(", "))
}
