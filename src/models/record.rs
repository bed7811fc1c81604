use chrono::{DateTime, Utc};
use serde_json::Value;

use super::usage::UsageTotals;

/// Record type tag of a transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Assistant,
    Other(String),
}

impl From<&str> for RecordKind {
    fn from(s: &str) -> Self {
        match s {
            "user" => RecordKind::User,
            "assistant" => RecordKind::Assistant,
            other => RecordKind::Other(other.to_string()),
        }
    }
}

/// One parsed transcript line. Fields the line lacks stay `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptRecord {
    pub kind: RecordKind,
    pub timestamp: Option<DateTime<Utc>>,
    /// `message.usage`, only read on assistant records
    pub message_usage: Option<UsageTotals>,
    /// `toolUseResult.usage` when `toolUseResult` is an object
    pub tool_usage: Option<UsageTotals>,
    pub model: Option<String>,
}

impl TranscriptRecord {
    pub fn from_value(v: &Value) -> Self {
        let kind = v
            .get("type")
            .and_then(Value::as_str)
            .map(RecordKind::from)
            .unwrap_or_else(|| RecordKind::Other(String::new()));
        let timestamp = v
            .get("timestamp")
            .and_then(Value::as_str)
            .and_then(parse_timestamp);

        let message = v.get("message").filter(|m| m.is_object());
        let (message_usage, model) = if kind == RecordKind::Assistant {
            (
                message.and_then(|m| m.get("usage")).and_then(usage_from_value),
                message
                    .and_then(|m| m.get("model"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
            )
        } else {
            (None, None)
        };
        let tool_usage = v
            .get("toolUseResult")
            .filter(|t| t.is_object())
            .and_then(|t| t.get("usage"))
            .and_then(usage_from_value);

        Self {
            kind,
            timestamp,
            message_usage,
            tool_usage,
            model,
        }
    }

    /// Usage this record contributes to session totals: the assistant message usage when
    /// present, otherwise a structured tool result's usage.
    pub fn usage(&self) -> Option<&UsageTotals> {
        self.message_usage.as_ref().or(self.tool_usage.as_ref())
    }

    pub fn is_user(&self) -> bool {
        self.kind == RecordKind::User
    }

    pub fn is_assistant(&self) -> bool {
        self.kind == RecordKind::Assistant
    }
}

/// Parses an RFC 3339 instant (`Z` suffix or explicit offset) into UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn usage_from_value(v: &Value) -> Option<UsageTotals> {
    let obj = v.as_object()?;
    let counter = |key: &str| obj.get(key).and_then(Value::as_u64).unwrap_or(0);
    Some(UsageTotals {
        input: counter("input_tokens"),
        output: counter("output_tokens"),
        cache_creation: counter("cache_creation_input_tokens"),
        cache_read: counter("cache_read_input_tokens"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assistant_record_reads_message_usage_and_model() {
        let rec = TranscriptRecord::from_value(&json!({
            "type": "assistant",
            "timestamp": "2025-08-01T10:00:04.000Z",
            "message": {
                "model": "claude-sonnet-4-20250514",
                "usage": {"input_tokens": 10, "output_tokens": 20, "cache_read_input_tokens": 5}
            }
        }));
        assert!(rec.is_assistant());
        assert_eq!(rec.model.as_deref(), Some("claude-sonnet-4-20250514"));
        let u = rec.usage().unwrap();
        assert_eq!((u.input, u.output, u.cache_creation, u.cache_read), (10, 20, 0, 5));
        assert!(rec.timestamp.is_some());
    }

    #[test]
    fn user_message_usage_is_ignored() {
        let rec = TranscriptRecord::from_value(&json!({
            "type": "user",
            "message": {"usage": {"input_tokens": 10}}
        }));
        assert!(rec.usage().is_none());
    }

    #[test]
    fn tool_result_usage_needs_object() {
        let rec = TranscriptRecord::from_value(&json!({
            "type": "user",
            "toolUseResult": {"usage": {"output_tokens": 7}}
        }));
        assert_eq!(rec.usage().map(|u| u.output), Some(7));

        let rec = TranscriptRecord::from_value(&json!({
            "type": "user",
            "toolUseResult": "Error: tool failed"
        }));
        assert!(rec.usage().is_none());
    }

    #[test]
    fn assistant_message_usage_wins_over_tool_usage() {
        let rec = TranscriptRecord::from_value(&json!({
            "type": "assistant",
            "message": {"usage": {"input_tokens": 1}},
            "toolUseResult": {"usage": {"input_tokens": 100}}
        }));
        assert_eq!(rec.usage().map(|u| u.input), Some(1));
    }

    #[test]
    fn unparseable_timestamp_is_none() {
        let rec = TranscriptRecord::from_value(&json!({"type": "user", "timestamp": "yesterday"}));
        assert!(rec.timestamp.is_none());
        let rec = TranscriptRecord::from_value(&json!({"type": "summary"}));
        assert_eq!(rec.kind, RecordKind::Other("summary".to_string()));
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let a = parse_timestamp("2025-08-01T12:00:00+02:00").unwrap();
        let b = parse_timestamp("2025-08-01T10:00:00Z").unwrap();
        assert_eq!(a, b);
    }
}
