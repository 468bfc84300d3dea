use bazari_types::FieldValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Stand-in for missing or empty values.
pub const PLACEHOLDER: &str = "—";

/// A display representation: plain text, or a preformatted block for
/// nested structures the view renders as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted {
    Text(String),
    Block(String),
}

impl Formatted {
    pub fn as_str(&self) -> &str {
        match self {
            Formatted::Text(s) | Formatted::Block(s) => s,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Formatted::Block(_))
    }
}

/// Canonical display form of an arbitrary field value.
///
/// Total over its input: missing data resolves to the placeholder and
/// malformed data degrades to a verbatim string, never an error.
pub fn format_value(value: Option<&FieldValue>) -> Formatted {
    let Some(value) = value else {
        return Formatted::Text(PLACEHOLDER.to_string());
    };

    match value {
        FieldValue::Null => Formatted::Text(PLACEHOLDER.to_string()),
        FieldValue::Bool(b) => Formatted::Text(if *b { "Yes" } else { "No" }.to_string()),
        FieldValue::Number(n) => Formatted::Text(n.to_string()),
        FieldValue::Text(s) => match render_date(s) {
            Some(rendered) => Formatted::Text(rendered),
            None => Formatted::Text(s.clone()),
        },
        FieldValue::TextList(items) => {
            if items.is_empty() {
                Formatted::Text(PLACEHOLDER.to_string())
            } else {
                Formatted::Text(items.join(", "))
            }
        }
        FieldValue::Other(Value::Object(map)) => {
            let raw = serde_json::to_string_pretty(map).unwrap_or_default();
            Formatted::Block(raw)
        }
        FieldValue::Other(Value::Array(items)) => {
            if items.is_empty() {
                Formatted::Text(PLACEHOLDER.to_string())
            } else {
                let joined: Vec<String> = items.iter().map(stringify_element).collect();
                Formatted::Text(joined.join(", "))
            }
        }
        FieldValue::Other(other) => Formatted::Text(other.to_string()),
    }
}

fn stringify_element(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => PLACEHOLDER.to_string(),
        other => other.to_string(),
    }
}

/// Date detection over string values only.
///
/// Restricted to recognizable date shapes so that numeric strings like
/// "2024" stay verbatim; anything unparsable falls through to the
/// string rule.
fn render_date(s: &str) -> Option<String> {
    let t = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.format("%Y-%m-%d %H:%M").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.format("%Y-%m-%d %H:%M").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.format("%Y-%m-%d %H:%M").to_string());
    }
    if let Ok(d) = NaiveDate::parse_from_str(t, "%Y-%m-%d") {
        return Some(d.format("%Y-%m-%d").to_string());
    }
    None
}
