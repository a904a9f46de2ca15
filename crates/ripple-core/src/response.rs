use std::ops::{Deref, Index};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{ADMIN_ACCESS_HINT, STATUS_ERROR, STATUS_SUCCESS};
use crate::error::RippleError;

static NULL: Value = Value::Null;

/// A decoded JSON object handed back by every client operation.
///
/// On success this is the node's `result` object. On failure it is either the
/// node's own error body or one of the normalized shapes built by
/// [`Response::from`]; callers inspect [`Response::is_error`] rather than
/// matching on `Err`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response(Map<String, Value>);

impl Response {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build a response from an arbitrary JSON value. Only objects are
    /// accepted.
    pub fn from_value(value: Value) -> Result<Self, RippleError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(RippleError::Decode(format!(
                "expected a JSON object, got {}",
                kind(&other)
            ))),
        }
    }

    /// The `status` field, when present.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    pub fn is_success(&self) -> bool {
        self.status() == Some(STATUS_SUCCESS)
    }

    /// True when the node reported an error or the request never completed.
    pub fn is_error(&self) -> bool {
        self.status() == Some(STATUS_ERROR) || self.0.contains_key("error")
    }

    /// The node's error token, e.g. `actNotFound` or `malformedAddress`.
    pub fn error(&self) -> Option<&str> {
        self.0.get("error").and_then(Value::as_str)
    }

    /// Human-readable detail for an error response, whichever field carries it.
    pub fn error_message(&self) -> Option<&str> {
        ["error_message", "msg", "text", "error_exception"]
            .iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }

    /// The `marker` a paginated method returned, if the result is partial.
    pub fn marker(&self) -> Option<&Value> {
        self.0.get("marker")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Convert an error-shaped response into `Err`, for callers that want `?`.
    pub fn into_result(self) -> Result<Map<String, Value>, RippleError> {
        if !self.is_error() {
            return Ok(self.into_inner());
        }
        let error = self.error().unwrap_or(STATUS_ERROR).to_string();
        let message = self.error_message().unwrap_or_default().to_string();
        Err(RippleError::Server { error, message })
    }

    fn error_shape(msg: String, text: Option<String>) -> Self {
        let mut map = Map::new();
        map.insert("status".into(), Value::String(STATUS_ERROR.into()));
        map.insert("msg".into(), Value::String(msg));
        if let Some(text) = text {
            map.insert("text".into(), Value::String(text));
        }
        Self(map)
    }
}

impl From<&RippleError> for Response {
    fn from(err: &RippleError) -> Self {
        match err {
            RippleError::Http { status: 403, .. } => {
                Self::error_shape(err.to_string(), Some(ADMIN_ACCESS_HINT.into()))
            }
            RippleError::Http { reason, body, .. } => {
                let text = match body.trim() {
                    "" => reason.clone(),
                    trimmed => trimmed.to_string(),
                };
                Self::error_shape(err.to_string(), Some(text))
            }
            RippleError::Server { error, message } => {
                let mut map = Map::new();
                map.insert("status".into(), Value::String(STATUS_ERROR.into()));
                map.insert("error".into(), Value::String(error.clone()));
                if !message.is_empty() {
                    map.insert("error_message".into(), Value::String(message.clone()));
                }
                Self(map)
            }
            other => Self::error_shape(other.to_string(), None),
        }
    }
}

impl From<RippleError> for Response {
    fn from(err: RippleError) -> Self {
        Self::from(&err)
    }
}

impl From<Map<String, Value>> for Response {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl Deref for Response {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Missing keys index to `null`, matching `serde_json::Value`.
impl Index<&str> for Response {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&NULL)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
