const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Removes markdown code-fence markers from model output.
///
/// Every occurrence of "```json" and then "```" is dropped, not only a
/// leading/trailing pair, and the remainder is trimmed.
pub fn strip_json_fences(text: &str) -> String {
    text.trim()
        .replace(JSON_FENCE, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}

/// Prefixes `https://` unless the URL already names an http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
