use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

/// Exact `YYYY-MM-DD` shape; chrono alone would accept `24-01-01` or `2024-1-1`.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// Format check only, no DNS or mailbox verification.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && EMAIL_RE.is_match(email)
}

/// Strict `YYYY-MM-DD` parse. Impossible calendar dates (`2024-02-30`) fail.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Returns the names from `fields` that are absent from `payload` or hold a falsy value.
///
/// Empty strings, `0`, `false`, `null` and empty arrays/objects all count as missing.
/// A payload that is not a JSON object is treated as an empty object.
pub fn require_fields(payload: &Value, fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .filter(|field| !payload.get(**field).is_some_and(is_truthy))
        .map(|field| field.to_string())
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Text of a payload field, trimmed. Non-string scalars use their JSON text.
pub fn field_text(payload: &Value, field: &str) -> String {
    match payload.get(field) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string().trim().to_string(),
    }
}
