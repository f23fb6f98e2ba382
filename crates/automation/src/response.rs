use crate::error::AutomationError;
use serde_json::Value;

/// Status and body text of a service reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Best-effort classification of a response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Non-JSON bodies fall back to `Text`; this never fails.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// Rendering used for successful calls: strings are returned as-is,
    /// structured values as compact JSON.
    pub fn into_output(self) -> String {
        match self {
            Self::Empty | Self::Json(Value::Null) => String::new(),
            Self::Text(text) | Self::Json(Value::String(text)) => text,
            Self::Json(value) => value.to_string(),
        }
    }

    /// Rendering used in error messages.
    pub fn to_error_snapshot(&self) -> String {
        match self {
            Self::Empty => "null".to_string(),
            Self::Text(text) | Self::Json(Value::String(text)) => text.clone(),
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

/// Turns a raw reply into the tool's string result.
pub fn interpret(response: RawResponse) -> Result<String, AutomationError> {
    let success = response.is_success();
    let body = ResponseBody::parse(&response.body);

    if !success {
        return Err(AutomationError::ServiceError {
            status: response.status,
            body: body.to_error_snapshot(),
        });
    }

    Ok(body.into_output())
}
