use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard envelope returned by service calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub error: Option<Value>,
    pub http_status_code: Option<u16>,
    pub message: Option<Value>,
    pub data: Option<T>,
}

/// Falsy values (null, false, 0, "") in `error`, `message` and `data`, and a
/// 0 status, are stored as `None`.
pub fn build_result(
    error: Option<Value>,
    http_status_code: u16,
    message: Option<Value>,
    data: Option<Value>,
) -> ApiResult<Value> {
    ApiResult {
        error: error.filter(is_truthy),
        http_status_code: Some(http_status_code).filter(|c| *c != 0),
        message: message.filter(is_truthy),
        data: data.filter(is_truthy),
    }
}

pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
