//! Just enough HTML for the chart placeholder.

use std::borrow::Cow;

use crate::messages;

/// Escapes `s` for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Renders an element with escaped attribute values and raw `contents`.
pub fn raw_element(tag: &str, attrs: &[(&str, &str)], contents: &str) -> String {
    let mut html = format!("<{tag}");
    for (name, value) in attrs {
        html.push_str(&format!(" {name}=\"{}\"", escape(value)));
    }
    html.push('>');
    html.push_str(contents);
    html.push_str(&format!("</{tag}>"));
    html
}

pub fn element(tag: &str, attrs: &[(&str, &str)], text: &str) -> String {
    raw_element(tag, attrs, &escape(text))
}

/// Wraps `js` in a script element.
///
/// `</` is written as `<\/` so that string literals in `js` cannot close the
/// element.
pub fn inline_script(js: &str) -> String {
    raw_element("script", &[], &js.replace("</", "<\\/"))
}

/// Indicator shown until the chart script has replaced it.
pub fn processing_element() -> String {
    raw_element(
        "div",
        &[("class", "srf-processing-element")],
        &element(
            "span",
            &[("class", "srf-processing-text")],
            messages::get(messages::MODULE_LOADING),
        ),
    )
}

/// Message rendered in place of the output of a failed printer.
pub fn error_element(message: &str) -> String {
    element("span", &[("class", "error")], message)
}
