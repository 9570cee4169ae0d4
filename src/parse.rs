//! Strict-parse delegation, the repair fallback, and format/minify wrappers.

use crate::error::JsonError;
use crate::repair::repair_json;
use serde::Serialize;
use serde_json::Value;

/// Successful parse/format outcome. Exactly one of success/error holds by
/// construction of the `Result`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonOutput {
    pub value: Value,
    /// Pretty-printed or minified text, set by the format/minify operations.
    pub formatted: Option<String>,
    /// True only when the strict parse failed and the repair pipeline
    /// produced a parseable result.
    pub repaired: bool,
}

pub type JsonResult = Result<JsonOutput, JsonError>;

/// Strict parse only; no repair attempted. Blank input is rejected up front.
pub fn parse_json(input: &str) -> JsonResult {
    if input.trim().is_empty() {
        return Err(JsonError::EmptyInput);
    }
    match serde_json::from_str(input) {
        Ok(value) => Ok(JsonOutput {
            value,
            formatted: None,
            repaired: false,
        }),
        Err(e) => Err(JsonError::from_parse(e)),
    }
}

/// Strict parse with repair fallback. If both the strict parse and the
/// repaired retry fail, the error from the *original* input is returned;
/// repair-stage failures are invisible to the caller.
pub fn parse_json_with_repair(input: &str) -> JsonResult {
    let original_err = match parse_json(input) {
        Ok(out) => return Ok(out),
        Err(e) => e,
    };
    if original_err == JsonError::EmptyInput {
        return Err(original_err);
    }
    let repaired = repair_json(input);
    match serde_json::from_str(&repaired) {
        Ok(value) => Ok(JsonOutput {
            value,
            formatted: None,
            repaired: true,
        }),
        Err(_) => Err(original_err),
    }
}

/// Parse (with repair fallback) and pretty-print with `indent` spaces per
/// level. An indent of 0 produces compact output.
pub fn format_json_with_repair(input: &str, indent: usize) -> JsonResult {
    let mut out = parse_json_with_repair(input)?;
    out.formatted = Some(serialize_with_indent(&out.value, indent)?);
    Ok(out)
}

/// Parse (with repair fallback) and serialize compactly.
pub fn minify_json_with_repair(input: &str) -> JsonResult {
    format_json_with_repair(input, 0)
}

fn serialize_with_indent(value: &Value, indent: usize) -> Result<String, JsonError> {
    if indent == 0 {
        return serde_json::to_string(value).map_err(JsonError::from_serialize);
    }
    let pad = vec![b' '; indent];
    let mut buf = Vec::with_capacity(128);
    let fmt = serde_json::ser::PrettyFormatter::with_indent(&pad);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    value
        .serialize(&mut ser)
        .map_err(JsonError::from_serialize)?;
    String::from_utf8(buf).map_err(|e| JsonError::Serialize(e.to_string()))
}
