//! Chat-conversation payload in the OpenAI-compatible request shape.

use crate::config::SyntheticConfig;
use crate::corpus;
use crate::error::{FieldIssue, ValidationError};
use crate::payload::ApiPayload;
use crate::schema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// One conversation turn.
///
/// The role is deliberately an open string, not an enum: the contract never
/// restricted it and the load generator must be able to replay whatever role
/// strings the sampled traffic carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub(crate) const REQUIRED_FIELDS: &'static [&'static str] = &["role", "content"];

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    pub fn validate_from(raw: &Map<String, Value>) -> crate::Result<Self> {
        schema::check_required(Self::REQUIRED_FIELDS, raw)?;
        Ok(Self {
            role: schema::extract_str(raw, "role")?,
            content: schema::extract_str(raw, "content")?,
        })
    }
}

/// Chat request: model identifier, ordered conversation turns, streaming
/// flag, and the token budget.
///
/// ```json
/// { "model": "<string>",
///   "messages": [ { "role": "<string>", "content": "<string>" }, ... ],
///   "stream": <bool>, "maxTokens": <int> }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationPayload {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    #[serde(rename = "maxTokens")]
    pub max_tokens: u64,
}

impl ApiPayload for ConversationPayload {
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["model", "messages", "stream", "maxTokens"];

    fn synthesize(config: &SyntheticConfig) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![ChatMessage::user(corpus::random_prompt(config.prompt_words))],
            stream: config.stream,
            max_tokens: config.max_tokens,
        }
    }

    fn validate_from(raw: &Map<String, Value>) -> crate::Result<Self> {
        schema::check_required(Self::REQUIRED_FIELDS, raw)?;
        let model = schema::extract_str(raw, "model")?;
        let elements = schema::extract_array(raw, "messages")?;
        // One malformed turn anywhere fails the whole payload; no partial
        // message list is ever constructed. Turn order is preserved as given.
        let mut messages = Vec::with_capacity(elements.len());
        for element in elements {
            let object = element.as_object().ok_or_else(|| {
                ValidationError::single("messages", FieldIssue::expected("object"))
            })?;
            let message = ChatMessage::validate_from(object)
                .map_err(|err| ValidationError::single("messages", FieldIssue::from(err)))?;
            messages.push(message);
        }
        let stream = schema::extract_bool(raw, "stream")?;
        let max_tokens = schema::extract_u64(raw, "maxTokens")?;
        Ok(Self {
            model,
            messages,
            stream,
            max_tokens,
        })
    }

    fn to_wire_json(&self) -> Value {
        json!({
            "model": self.model,
            "messages": self
                .messages
                .iter()
                .map(|message| json!({ "role": message.role, "content": message.content }))
                .collect::<Vec<_>>(),
            "stream": self.stream,
            "maxTokens": self.max_tokens,
        })
    }

    fn count_workload(&self) -> u64 {
        self.max_tokens
    }
}
