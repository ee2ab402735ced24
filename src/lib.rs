//! # tgi-loadgen
//!
//! Request-payload contract for a load-testing client that drives
//! text-generation inference servers.
//!
//! ## Overview
//!
//! This crate validates untrusted JSON into strongly-typed request objects,
//! synthesizes randomized payloads for benchmark generation, and exposes a
//! normalized workload size (token budget) used for throughput accounting.
//! Transport, response parsing, and scheduling live in the benchmark driver
//! that consumes these types.
//!
//! Two payload families share one contract:
//!
//! - [`SimplePromptPayload`] — a flat prompt string plus generation
//!   parameters, the native text-generation-inference request shape.
//! - [`ConversationPayload`] — an OpenAI-style chat request with an ordered
//!   message list.
//!
//! Both implement [`ApiPayload`] and are carried by the closed [`Payload`]
//! enum so the driver can branch on the request kind without downcasting.
//!
//! Validation never fails fast: every missing required field at a level is
//! reported in one [`ValidationError`], and a nested failure is namespaced
//! one level down under its parent key. The driver logs the structured error
//! and skips the request instead of aborting the batch.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`payload`] | Payload types, the `ApiPayload` contract, workload accounting |
//! | [`schema`] | Declared required-field schemas and presence checking |
//! | [`corpus`] | Process-wide word list for synthetic prompt generation |
//! | [`config`] | Defaults for synthetic payload generation |
//! | [`error`] | Aggregated, field-keyed validation errors |
//!
//! ## Quick Start
//!
//! ```rust
//! use tgi_loadgen::{ApiPayload, SimplePromptPayload};
//!
//! let raw = serde_json::json!({
//!     "inputs": "hello",
//!     "parameters": { "maxNewTokens": 10 }
//! });
//! let payload = SimplePromptPayload::validate_from(raw.as_object().unwrap())?;
//! assert_eq!(payload.count_workload(), 10);
//! # Ok::<(), tgi_loadgen::ValidationError>(())
//! ```

pub mod config;
pub mod corpus;
pub mod payload;
pub mod schema;

// Re-export main types for convenience
pub use config::SyntheticConfig;
pub use payload::{
    chat::{ChatMessage, ConversationPayload},
    prompt::{PromptParameters, SimplePromptPayload},
    ApiPayload, Payload,
};

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Error type for the crate
pub mod error;
pub use error::{FieldIssue, ValidationError};
