//! External generative-AI collaborator.
//!
//! The rest of the crate sees only [`Collaborator::generate`]: one prompt in,
//! raw text out. Implementations must perform exactly one upstream call per
//! invocation and never retry.

pub mod gemini;

use crate::error::RequestError;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use gemini::GeminiClient;

/// How the collaborator is asked to shape its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMode {
    /// Schema-constrained JSON output
    Structured,
    /// Prompt-instructed JSON inside free text
    FreeText,
}

impl Default for IntegrationMode {
    fn default() -> Self {
        IntegrationMode::Structured
    }
}

/// Trait for the text-generating service behind every comparison
pub trait Collaborator: Send + Sync {
    /// Generate a reply for `prompt`.
    ///
    /// When `response_schema` is given the service is asked to conform to it;
    /// otherwise the prompt alone describes the expected output.
    fn generate(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> BoxFuture<'static, Result<String, RequestError>>;
}
