//! # Generative oracle interface
//!
//! A trait-based abstraction over the language model that proposes words.
//!
//! ## Design
//! - `LlmProvider` trait defines the single completion call the game needs
//! - `OllamaProvider` implements it against a local `/api/generate`
//! - Sampling is fixed per provider via `SamplingParams`

pub mod ollama;

pub use ollama::OllamaProvider;

use serde::{Deserialize, Serialize};

// ============================================================================
// Core Types
// ============================================================================

/// Sampling configuration sent with every generation request.
///
/// The defaults favor diverse but plausible words and leave room for one
/// word of output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 20,
        }
    }
}

/// One generation; model and sampling come from the provider's configuration
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Response from a generation request
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    pub model: String,
    /// Free-form completion text
    pub text: String,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Error type for provider operations
#[derive(Debug)]
pub enum ProviderError {
    /// Network/connection error
    Network(String),
    /// API returned an error
    Api { status: u16, message: String },
    /// Failed to parse response
    Parse(String),
    /// Model not found
    ModelNotFound(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::ModelNotFound(m) => write!(f, "Model not found: {}", m),
            Self::Other(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProviderError {}

/// The generative oracle trait
#[allow(async_fn_in_trait)]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "ollama")
    fn name(&self) -> &str;

    fn default_model(&self) -> &str;

    /// Send a generation request and get the full completion
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ProviderError>;

    /// Simple prompt -> text helper
    async fn prompt(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self.generate(GenerateRequest::new(prompt)).await?;
        Ok(response.text)
    }
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for creating providers
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub default_model: String,
    pub sampling: SamplingParams,
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub const OLLAMA_URL: &'static str = "http://localhost:11434";

    /// Local Ollama server on its default port, `mistral` model
    pub fn ollama() -> Self {
        Self {
            base_url: Self::OLLAMA_URL.into(),
            default_model: "mistral".into(),
            sampling: SamplingParams::default(),
            timeout_secs: 120,
        }
    }


}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::ollama()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request() {
        let request = GenerateRequest::new("Give me a word");
        assert_eq!(request.prompt, "Give me a word");
    }

    #[test]
    fn test_default_sampling() {
        let sampling = SamplingParams::default();
        assert_eq!(sampling.temperature, 0.7);
        assert_eq!(sampling.top_p, 0.9);
        assert_eq!(sampling.max_tokens, 20);
    }

    #[test]
    fn test_provider_config() {
        let config = ProviderConfig::ollama();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.default_model, "mistral");
        assert_eq!(config.sampling, SamplingParams::default());
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Api { status: 404, message: "model 'x' not found".into() };
        assert_eq!(err.to_string(), "API error (404): model 'x' not found");
        assert_eq!(ProviderError::Network("refused".into()).to_string(), "Network error: refused");
    }
}
