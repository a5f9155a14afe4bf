//! Request Bodies
//!
//! Structured bodies go out as JSON text, plain strings go out unmodified.

use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Body of a POST, PUT, PATCH or DELETE request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body at all
    Empty,

    /// Serialized to JSON text before sending
    Json(Value),

    /// Sent as-is
    Text(String),
}

impl RequestBody {
    /// The body sent by a DELETE when the caller supplies none: `[]`
    pub fn empty_array() -> Self {
        RequestBody::Json(Value::Array(Vec::new()))
    }

    /// Serialize any typed payload into a JSON body
    pub fn json<T: Serialize>(payload: &T) -> Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(payload)?))
    }

    /// Wire text for this body
    pub fn into_text(self) -> Result<Option<String>> {
        match self {
            RequestBody::Empty => Ok(None),
            RequestBody::Json(value) => Ok(Some(serde_json::to_string(&value)?)),
            RequestBody::Text(text) => Ok(Some(text)),
        }
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RequestBody::Empty,
            Value::String(text) => RequestBody::Text(text),
            other => RequestBody::Json(other),
        }
    }
}

impl From<Map<String, Value>> for RequestBody {
    fn from(map: Map<String, Value>) -> Self {
        RequestBody::Json(Value::Object(map))
    }
}

impl From<Vec<Value>> for RequestBody {
    fn from(items: Vec<Value>) -> Self {
        RequestBody::Json(Value::Array(items))
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

impl<T: Into<RequestBody>> From<Option<T>> for RequestBody {
    fn from(body: Option<T>) -> Self {
        body.map(Into::into).unwrap_or(RequestBody::Empty)
    }
}
