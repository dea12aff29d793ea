//! Autocomplete ("gossip") suggestions
//!
//! The endpoint answers `["query", ["suggestion", ...], ...]`, sometimes
//! wrapped in a JSONP callback.

use serde_json::Value;

use crate::error::{Context, Operation, Result};

/// Parse a gossip response into suggestions, preserving Yahoo's order
pub fn parse_autocomplete(body: &str, query: &str) -> Result<Vec<String>> {
    let ctx = Context::new(Operation::Autocomplete, query);
    let json = strip_callback(body);

    let value: Value =
        serde_json::from_str(json).map_err(|e| ctx.parse(format!("invalid suggestion JSON: {e}")))?;

    let suggestions = value
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| ctx.parse("suggestion list missing from response"))?;

    Ok(suggestions
        .iter()
        .filter_map(|s| s.as_str())
        .map(str::to_string)
        .collect())
}

/// `cb([...]);` -> `[...]`; plain JSON passes through
fn strip_callback(body: &str) -> &str {
    let trimmed = body.trim();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return trimmed;
    }

    match (trimmed.find('('), trimmed.rfind(')')) {
        (Some(open), Some(close)) if open < close => &trimmed[open + 1..close],
        _ => trimmed,
    }
}
