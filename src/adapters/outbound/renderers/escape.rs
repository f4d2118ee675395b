//! Escaping utilities for the generated viewer.
//!
//! Everything taken from an AI-BOM is untrusted: names, publishers and
//! endpoints end up inside HTML text, attributes and inline `<script>`
//! blocks, and must not be able to break out of them.

/// Escape a string for safe inclusion in HTML content or attribute values.
///
/// # Examples
///
/// ```
/// use ai_bom_visualizer::adapters::outbound::renderers::escape::escape_html;
///
/// assert_eq!(escape_html("<b>\"a\" & 'b'</b>"),
///     "&lt;b&gt;&quot;a&quot; &amp; &#x27;b&#x27;&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape an optional string, rendering `None` as "-".
pub fn escape_html_opt(s: Option<&str>) -> String {
    s.map(escape_html).unwrap_or_else(|| "-".to_string())
}

/// Make JSON text safe to embed in a `<script type="application/json">` block.
///
/// Every `</script` (any letter case) and every `<!--` gets its `<`
/// rewritten as `\u003c`. The first would close the element early; the
/// second would switch the tokenizer into its escaped states, where the real
/// closing tag no longer ends the block. The JSON stays equivalent: both
/// sequences can only occur inside a string literal, where `\u003c` decodes
/// back to `<`.
///
/// # Examples
///
/// ```
/// use ai_bom_visualizer::adapters::outbound::renderers::escape::escape_script_content;
///
/// assert_eq!(escape_script_content(r#"{"n":"</SCRIPT>"}"#), r#"{"n":"\u003c/SCRIPT>"}"#);
/// assert_eq!(escape_script_content(r#"{"n":"<!--"}"#), r#"{"n":"\u003c!--"}"#);
/// ```
pub fn escape_script_content(json: &str) -> String {
    const CLOSE_TAG: &[u8] = b"/script";
    const COMMENT_OPEN: &[u8] = b"!--";

    let bytes = json.as_bytes();
    let mut result = String::with_capacity(json.len());
    let mut copied = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'<' {
            continue;
        }
        let rest = &bytes[i + 1..];
        let opens_close_tag =
            rest.len() >= CLOSE_TAG.len() && rest[..CLOSE_TAG.len()].eq_ignore_ascii_case(CLOSE_TAG);
        if opens_close_tag || rest.starts_with(COMMENT_OPEN) {
            result.push_str(&json[copied..i]);
            result.push_str("\\u003c");
            copied = i + 1;
        }
    }
    result.push_str(&json[copied..]);
    result
}

/// Is the URL safe to put in an `href`?
///
/// Only web and mail links are emitted; `javascript:` and other schemes
/// are rendered as plain text.
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}
