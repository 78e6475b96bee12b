//! Ollama provider implementation
//!
//! Talks to Ollama's native, non-streaming `/api/generate` endpoint.

use super::*;
use crate::error::{self, Error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Ollama provider
pub struct OllamaProvider {
    client: Client,
    config: ProviderConfig,
}

impl OllamaProvider {
    pub fn new(config: ProviderConfig) -> error::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                Error::config_invalid("failed to create HTTP client")
                    .with_operation("ollama::new")
                    .set_source(e)
            })?;

        Ok(Self { client, config })
    }

    /// Create with default local settings
    pub fn local() -> error::Result<Self> {
        Self::new(ProviderConfig::ollama())
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }
}

impl LlmProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ProviderError> {
        let model = self.default_model();
        let sampling = self.config.sampling;

        let api_request = OllamaRequest {
            model,
            prompt: &request.prompt,
            stream: false,
            temperature: sampling.temperature,
            top_p: sampling.top_p,
            max_tokens: sampling.max_tokens,
        };

        tracing::debug!(model, prompt_len = request.prompt.len(), "ollama generate");

        let response = self.client
            .post(format!("{}/api/generate", self.base_url()))
            .json(&api_request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();

            if status == 404 {
                return Err(ProviderError::ModelNotFound(model.to_string()));
            }

            return Err(ProviderError::Api { status, message: text });
        }

        let api_response: OllamaResponse = response.json().await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(GenerateResponse {
            model: api_response.model.unwrap_or_else(|| model.to_string()),
            text: api_response.response,
        })
    }
}

// ============================================================================
// Ollama API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    temperature: f32,
    top_p: f32,
    max_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    model: Option<String>,
    response: String,
}
