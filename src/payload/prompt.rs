//! Flat prompt payload, the native text-generation-inference request shape.

use crate::config::SyntheticConfig;
use crate::corpus;
use crate::error::{FieldIssue, ValidationError};
use crate::payload::ApiPayload;
use crate::schema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Generation parameters nested inside [`SimplePromptPayload`].
///
/// Validated on its own, then composed into the parent's validation with the
/// parent namespacing any failure under its `parameters` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptParameters {
    #[serde(rename = "maxNewTokens")]
    pub max_new_tokens: u64,
}

impl PromptParameters {
    pub(crate) const REQUIRED_FIELDS: &'static [&'static str] = &["maxNewTokens"];

    pub fn validate_from(raw: &Map<String, Value>) -> crate::Result<Self> {
        schema::check_required(Self::REQUIRED_FIELDS, raw)?;
        Ok(Self {
            max_new_tokens: schema::extract_u64(raw, "maxNewTokens")?,
        })
    }
}

/// Flat request: one prompt string plus its generation parameters.
///
/// ```json
/// { "inputs": "<string>", "parameters": { "maxNewTokens": <int> } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePromptPayload {
    pub inputs: String,
    pub parameters: PromptParameters,
}

impl ApiPayload for SimplePromptPayload {
    const REQUIRED_FIELDS: &'static [&'static str] = &["inputs", "parameters"];

    fn synthesize(config: &SyntheticConfig) -> Self {
        Self {
            inputs: corpus::random_prompt(config.prompt_words),
            parameters: PromptParameters {
                max_new_tokens: config.max_new_tokens,
            },
        }
    }

    fn validate_from(raw: &Map<String, Value>) -> crate::Result<Self> {
        schema::check_required(Self::REQUIRED_FIELDS, raw)?;
        let inputs = schema::extract_str(raw, "inputs")?;
        let parameters_raw = schema::extract_object(raw, "parameters")?;
        let parameters = PromptParameters::validate_from(parameters_raw)
            .map_err(|err| ValidationError::single("parameters", FieldIssue::from(err)))?;
        Ok(Self { inputs, parameters })
    }

    fn to_wire_json(&self) -> Value {
        json!({
            "inputs": self.inputs,
            "parameters": { "maxNewTokens": self.parameters.max_new_tokens },
        })
    }

    fn count_workload(&self) -> u64 {
        self.parameters.max_new_tokens
    }
}
