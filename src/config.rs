//! Application configuration
//!
//! Provides centralized configuration for the service client and the
//! reveal animations. The API key is the only value read from the
//! environment.

use crate::{GenAiError, Result};
use std::time::Duration;

/// Environment variable holding the generative service API key
pub const API_KEY_ENV: &str = "GENAI_API_KEY";

/// Default service host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Default delay between two revealed segments
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(50);

/// Configuration for the generative service endpoint
#[derive(Clone)]
pub struct ServiceConfig {
    /// API key appended to every request
    pub api_key: String,
    /// Scheme and host of the service, without a trailing path
    pub base_url: String,
    /// Model identifier used in the request path
    pub model: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl ServiceConfig {
    /// Create a service configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Full URL of the generate endpoint, without the key query parameter
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Configuration for the complete application
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Generative service configuration
    pub service: ServiceConfig,

    /// Delay between revealed segments of a response
    pub reveal_interval: Duration,

    /// Lines cycled in the output box before any output is shown
    pub placeholder_lines: Vec<String>,

    /// Delay between typed characters of the placeholder and error lines
    pub typing_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            placeholder_lines: vec![
                "Your output will appear here.".to_string(),
                "It may take a few seconds.".to_string(),
            ],
            typing_delay: Duration::from_millis(40),
        }
    }
}

impl AppConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration using a custom variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .unwrap_or_default();

        let config = Self::default().with_api_key(api_key);
        config.validate()?;
        Ok(config)
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.service.api_key = api_key.into();
        self
    }

    /// Point the client at another service host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.service.base_url = base_url.into();
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.service.model = model.into();
        self
    }

    /// Set the reveal interval
    pub fn with_reveal_interval(mut self, interval: Duration) -> Self {
        self.reveal_interval = interval;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.service.api_key.is_empty() {
            return Err(GenAiError::ConfigError(format!(
                "{} is not set",
                API_KEY_ENV
            )));
        }

        if self.service.model.is_empty() {
            return Err(GenAiError::ConfigError("Model identifier is empty".to_string()));
        }

        if !self.service.base_url.starts_with("http://")
            && !self.service.base_url.starts_with("https://")
        {
            return Err(GenAiError::ConfigError(format!(
                "Invalid service URL: {}",
                self.service.base_url
            )));
        }

        Ok(())
    }
}
