//! Defaults for synthetic payload generation.

use serde::{Deserialize, Serialize};

/// Shape of the payloads synthesized for a benchmark run when no real
/// traffic sample is available.
///
/// Deserializable so a driver can load it from its benchmark config file;
/// the defaults mirror typical text-generation-inference test traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Words sampled from the corpus for each generated prompt.
    pub prompt_words: usize,
    /// `maxNewTokens` for generated simple-prompt payloads.
    pub max_new_tokens: u64,
    /// `maxTokens` for generated conversation payloads.
    pub max_tokens: u64,
    /// Model identifier stamped on generated conversation payloads.
    pub model: String,
    /// Streaming flag for generated conversation payloads.
    pub stream: bool,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            prompt_words: 250,
            max_new_tokens: 256,
            max_tokens: 1024,
            model: "/models/default.gguf".to_string(),
            stream: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = SyntheticConfig::default();
        assert_eq!(config.prompt_words, 250);
        assert_eq!(config.max_new_tokens, 256);
        assert_eq!(config.max_tokens, 1024);
        assert!(!config.stream);
    }

    #[test]
    fn partial_document_fills_in_defaults() {
        let config: SyntheticConfig =
            serde_json::from_value(serde_json::json!({ "max_tokens": 4096 })).unwrap();
        assert_eq!(config.max_tokens, 4096);
        assert_eq!(config.prompt_words, 250);
    }
}
