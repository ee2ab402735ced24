//! Payload types and the contract shared between them.
//!
//! The benchmark driver treats the two request families uniformly through
//! [`ApiPayload`] and branches on the closed [`Payload`] enum when it needs
//! to know which kind of request it is holding. Values are immutable once
//! constructed: either synthesized for a run or validated from a decoded
//! JSON document, then serialized onward or read for workload accounting.

pub mod chat;
pub mod prompt;

pub use chat::{ChatMessage, ConversationPayload};
pub use prompt::{PromptParameters, SimplePromptPayload};

use crate::config::SyntheticConfig;
use crate::error::{FieldIssue, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contract every request payload satisfies.
///
/// A payload can be synthesized from trusted test-data generation, validated
/// out of an untrusted raw JSON object, serialized back to its wire shape,
/// and asked for its workload size — the token budget the driver multiplies
/// by request rate to compute target throughput.
pub trait ApiPayload: Sized {
    /// Wire fields that must be present in a raw object, declared statically
    /// per type rather than discovered from the type's definition.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Build a payload with the given synthetic shape. Bypasses validation;
    /// generated values are consistent by construction.
    fn synthesize(config: &SyntheticConfig) -> Self;

    /// [`synthesize`](Self::synthesize) with default shape.
    fn for_test() -> Self {
        Self::synthesize(&SyntheticConfig::default())
    }

    /// Validate an untrusted raw object into a typed payload.
    ///
    /// Every missing required field at this level is reported in one
    /// aggregated [`ValidationError`]; a nested record's failure is carried
    /// whole under its parent field key. Unknown keys are ignored.
    fn validate_from(raw: &Map<String, Value>) -> crate::Result<Self>;

    /// Structural mirror of the wire shape this payload was parsed from.
    fn to_wire_json(&self) -> Value;

    /// Scalar token budget of this request. Pure projection of validated
    /// data, no transformation.
    fn count_workload(&self) -> u64;
}

/// Validate a decoded JSON document as payload type `P`.
///
/// Convenience for drivers holding a [`Value`] rather than an object map;
/// rejections are logged at debug level and passed through.
pub fn validate_document<P: ApiPayload>(document: &Value) -> crate::Result<P> {
    let raw = document
        .as_object()
        .ok_or_else(|| ValidationError::single("payload", FieldIssue::expected("object")))?;
    P::validate_from(raw).map_err(|err| {
        tracing::debug!("payload failed validation: {err}");
        err
    })
}

/// A request of either family.
///
/// Closed on purpose: the driver only ever needs to branch on "which kind of
/// request is this", so the two variants are the whole story. Untagged serde
/// representation means a trusted document deserializes straight into the
/// matching variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    SimplePrompt(SimplePromptPayload),
    Conversation(ConversationPayload),
}

impl Payload {
    pub fn to_wire_json(&self) -> Value {
        match self {
            Payload::SimplePrompt(payload) => payload.to_wire_json(),
            Payload::Conversation(payload) => payload.to_wire_json(),
        }
    }

    pub fn count_workload(&self) -> u64 {
        match self {
            Payload::SimplePrompt(payload) => payload.count_workload(),
            Payload::Conversation(payload) => payload.count_workload(),
        }
    }
}

impl From<SimplePromptPayload> for Payload {
    fn from(payload: SimplePromptPayload) -> Self {
        Payload::SimplePrompt(payload)
    }
}

impl From<ConversationPayload> for Payload {
    fn from(payload: ConversationPayload) -> Self {
        Payload::Conversation(payload)
    }
}
