use serde_json::Value;

pub mod attendance;
pub mod dashboard;
pub mod employee;
pub mod health;

/// Request bodies are read leniently: anything that is not valid JSON is treated as an
/// empty payload, so every required field is then reported missing.
pub(crate) fn json_payload(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}
