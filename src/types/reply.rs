use serde::Deserialize;
use serde_json::Value;

/// Body of a signup or removal response. Success bodies carry `message`,
/// failure bodies carry `detail`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplyBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl ApiReply {
    pub fn new(status: u16, body: ReplyBody) -> Self {
        Self { status, body }
    }

    pub fn empty(status: u16) -> Self {
        Self::new(status, ReplyBody::default())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn message(&self) -> Option<&str> {
        self.body
            .message
            .as_deref()
            .filter(|message| !message.is_empty())
    }

    /// Human readable failure detail. Validation failures arrive as a list of
    /// objects with a `msg` field; those are joined.
    pub fn detail(&self) -> Option<String> {
        match self.body.detail.as_ref()? {
            Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}
