/// Recovers the JSON document from a buffer that may carry non-JSON noise
///
/// Scanners such as the Snyk CLI print spinner or progress text on stdout
/// before the payload, and sometimes log lines after it. The document is
/// taken to span from the first `{` to the last `}` in the buffer, so
/// nested objects stay inside the slice without any brace balancing.
///
/// When there is no `{`, no `}`, or the last `}` does not come after the
/// first `{`, the whole input is returned trimmed. This never fails; a bad
/// extraction surfaces when the result is parsed.
///
/// # Examples
/// ```
/// use ai_bom_visualizer::bom_graph::services::extract_json;
///
/// let raw = "\\ Creating file bundle\n- Analyzing\n{\"bomFormat\":\"CycloneDX\"}\n";
/// assert_eq!(extract_json(raw), "{\"bomFormat\":\"CycloneDX\"}");
/// assert_eq!(extract_json("  no json here  "), "no json here");
/// ```
pub fn extract_json(raw: &str) -> &str {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if end > start => &raw[start..=end],
        _ => raw.trim(),
    }
}
