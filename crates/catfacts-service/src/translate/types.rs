//! Google Translate request and response shapes.

use serde::Serialize;
use serde_json::Value;

/// Query string of a `translate_a/single` call.
#[derive(Debug, Serialize)]
pub struct TranslateQuery<'a> {
    /// Client identifier; `gtx` selects the keyless public client.
    pub client: &'static str,
    /// Source language code.
    pub sl: &'a str,
    /// Target language code.
    pub tl: &'a str,
    /// Requested data section; `t` is the translation.
    pub dt: &'static str,
    /// Text to translate.
    pub q: &'a str,
}

/// Extract the translated text from a `translate_a/single` response.
///
/// The body is a nested array whose first element lists sentence segments, each of the
/// form `[translated, original, ...]`. Segments are joined in order. Returns `None` when
/// the shape does not match or no text comes out.
#[must_use]
pub fn extract_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
