use crate::core::ElementId;

/// Wraps JS statements in a `<script>` element.
#[must_use]
pub fn script_tag(body: &str) -> String {
    format!("\n<script type=\"text/javascript\">{body}\n</script>")
}

/// Container `div` for `element_id` followed by the script drawing into it.
#[must_use]
pub fn chart_div(element_id: &ElementId, script: &str) -> String {
    format!(
        "<div id='{}'></div>{script}",
        html_escape(element_id.as_str())
    )
}

/// Button invoking a zero-argument JS function on click.
#[must_use]
pub fn button(label: &str, on_click: &str) -> String {
    format!(
        "<input type='button' value='{}' onclick='{}()'/>",
        html_escape(label),
        html_escape(on_click)
    )
}

/// Escapes text for use in HTML content and quoted attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
