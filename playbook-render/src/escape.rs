//! Escaping for SVG text and emitted page source.

/// Escape text for use inside SVG element content or attribute values.
#[must_use]
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() && !matches!(c, '\n' | '\t') => {}
            c => out.push(c),
        }
    }
    out
}

/// Quote a string as a double-quoted source literal.
#[must_use]
pub fn quote_js(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}
