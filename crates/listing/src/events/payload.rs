use serde_json::Value;

use super::EventRecord;

#[derive(thiserror::Error, Debug)]
pub enum PayloadError {
    #[error("Failed to decode events json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a list of events, got {0}")]
    NotAList(&'static str),
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Strip a JSONP wrapper such as `callback([...]);` if one is present
pub fn strip_jsonp(body: &str) -> &str {
    let body = body.trim();
    if body.starts_with('[') || body.starts_with('{') {
        return body;
    }

    let Some(open) = body.find('(') else {
        return body;
    };
    let callback = body[..open].trim();
    let is_callback = !callback.is_empty()
        && callback
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.'));
    if !is_callback {
        return body;
    }

    let rest = body[open + 1..].trim_end();
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
    rest.strip_suffix(')').unwrap_or(rest).trim()
}

/// Decode an events API response body into records
pub fn parse_events_payload(body: &str) -> Result<Vec<EventRecord>, PayloadError> {
    let value: Value = serde_json::from_str(strip_jsonp(body))?;
    match value {
        Value::Array(items) => Ok(items.iter().map(EventRecord::from).collect()),
        other => Err(PayloadError::NotAList(kind(&other))),
    }
}
