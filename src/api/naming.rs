//! JS symbol names derived from element identifiers.
//!
//! Every name is a pure function of the element id, so two generators
//! targeting different elements on one page never share a symbol.

use crate::core::ElementId;
use crate::js::quote;

use super::ScriptConfig;

#[must_use]
pub fn chart_function_name(element_id: &ElementId) -> String {
    format!("draw_{}", element_id.js_suffix())
}

#[must_use]
pub fn query_response_function_name(element_id: &ElementId) -> String {
    format!("handle_{}_query_response", element_id.js_suffix())
}

#[must_use]
pub fn wrapper_variable_name(element_id: &ElementId) -> String {
    format!("wrapper_{}", element_id.js_suffix())
}

#[must_use]
pub fn editor_variable_name(element_id: &ElementId) -> String {
    format!("chart_editor_{}", element_id.js_suffix())
}

#[must_use]
pub fn open_editor_function_name(element_id: &ElementId) -> String {
    format!("open_editor_{}", element_id.js_suffix())
}

/// `google.load(...)` call fetching `package` and invoking `callback` once loaded.
#[must_use]
pub fn load_call(config: &ScriptConfig, package: &str, callback: &str) -> String {
    let language = config
        .language
        .as_deref()
        .map(|lang| format!(", language: {}", quote(lang)))
        .unwrap_or_default();
    format!(
        "\n  google.load('visualization', {}, {{packages: [{}]{language}, callback: {callback}}});",
        quote(&config.runtime_version),
        quote(package),
    )
}
