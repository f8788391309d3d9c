//! Wire DTOs for the `/send_message` exchange.
//!
//! DESIGN
//! ======
//! Replies are decoded from a loose `serde_json::Value` rather than a strict
//! struct: the server may send either key as `null`, and any other shape must
//! still surface as a renderable outcome instead of a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::num::FpCategory;

use serde::Serialize;
use serde_json::Value;

/// Request body posted to the chat endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest<'a> {
    pub message: &'a str,
}

/// Decoded reply body. A field is `None` when absent, `null`, `false`, zero or empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplyPayload {
    pub reply: Option<String>,
    pub error: Option<String>,
}

impl ReplyPayload {
    /// Extract `reply` and `error` from any JSON value. Non-objects carry neither.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self { reply: field_text(value, "reply"), error: field_text(value, "error") }
    }
}

fn field_text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(n) if n.as_f64().is_some_and(|v| v.classify() == FpCategory::Zero) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
