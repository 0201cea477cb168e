//! HTTP client for the generate endpoint

use crate::config::ServiceConfig;
use crate::llm::models::{GenerateRequest, GenerateResponse};
use crate::{GenAiError, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info};

/// A service that turns one prompt into one complete text
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Generate text for the prompt
    ///
    /// Fails with `NetworkFailure` when no usable HTTP response was
    /// received and `MalformedResponse` when the body has the wrong shape.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for the Gemini `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: ServiceConfig,
}

impl GeminiClient {
    /// Create a new client
    ///
    /// No request timeout is configured; a slow service simply delays the
    /// outcome.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GenAiError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    async fn send_request(&self, prompt: &str) -> Result<String> {
        let url = self.config.endpoint();
        let request_body = GenerateRequest::from_prompt(prompt);

        debug!("Sending generate request to {} ({} prompt chars)", url, prompt.len());

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("Generate response status: {}", status);

        if !status.is_success() {
            error!("Generate request rejected: {} - {}", status, body);
            return Err(GenAiError::NetworkFailure(format!("HTTP {}: {}", status, body)));
        }

        debug!("Generate response body: {}", body);
        Ok(body)
    }
}

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = self.send_request(prompt).await?;
        let response = GenerateResponse::parse(&body)?;

        if let Some(usage) = &response.usage_metadata {
            info!(
                "Generate usage - prompt: {:?} tokens, response: {:?} tokens, total: {:?} tokens",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        response.first_text().map(str::to_string)
    }
}
