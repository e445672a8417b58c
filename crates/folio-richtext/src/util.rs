//! Shared helpers for reading loosely-typed JSON and assembling output.

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Escape HTML special characters.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use folio_richtext::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Remove markup tags from an HTML fragment, keeping the text between them.
///
/// This is a lexical pass, not an HTML parser: everything from `<` to the
/// next `>` is dropped.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Whether a JSON value counts as "set" for the CMS.
///
/// `null`, `false`, `0` and `""` are unset; every other value, including an
/// empty array or object, is set.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read a primitive value as text, or `None` when it is unset.
///
/// Strings are returned verbatim, numbers in their shortest decimal form and
/// `true` as `"true"`. Arrays and objects are not primitives.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn primitive_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) => Some("true".to_owned()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i.to_string());
            }
            if let Some(u) = n.as_u64() {
                return Some(u.to_string());
            }
            let f = n.as_f64()?;
            if f.fract() == 0.0 && f.abs() < 1e15 {
                Some((f as i64).to_string())
            } else {
                Some(f.to_string())
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Look up `attrs.<key>` on a node object.
pub(crate) fn attr(node: &Map<String, Value>, key: &str) -> Option<String> {
    node.get("attrs")?
        .as_object()?
        .get(key)
        .and_then(primitive_text)
}

/// Count whitespace-separated words.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
