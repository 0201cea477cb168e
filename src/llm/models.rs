//! Wire types for the generate endpoint

use crate::{GenAiError, Result};
use serde::{Deserialize, Serialize};

/// Request envelope: `{"contents":[{"parts":[{"text":...}]}]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    /// Wrap a prompt in the provider's envelope, unchanged
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response envelope
///
/// Every field is optional on the wire so that shape problems surface as
/// `MalformedResponse` from [`GenerateResponse::first_text`] rather than as
/// opaque parse failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

impl GenerateResponse {
    /// Parse a raw response body
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Text of the first part of the first candidate
    pub fn first_text(&self) -> Result<&str> {
        let candidate = self
            .candidates
            .first()
            .ok_or_else(|| GenAiError::MalformedResponse("No candidates in response".to_string()))?;

        let content = candidate.content.as_ref().ok_or_else(|| {
            GenAiError::MalformedResponse("Candidate has no content".to_string())
        })?;

        let part = content
            .parts
            .first()
            .ok_or_else(|| GenAiError::MalformedResponse("No parts in candidate".to_string()))?;

        part.text
            .as_deref()
            .ok_or_else(|| GenAiError::MalformedResponse("First part has no text".to_string()))
    }
}
