//! Generative language service integration
//!
//! This module provides the client side of the single remote call the
//! application makes.
//!
//! - **models**: Request and response envelopes of the generate endpoint
//! - **client**: The `GenerativeService` seam and its HTTP implementation
//!
//! # Usage
//!
//! ```rust,ignore
//! use genai::config::ServiceConfig;
//! use genai::llm::{GeminiClient, GenerativeService};
//!
//! let client = GeminiClient::new(ServiceConfig::new(api_key))?;
//! let text = client.generate("Write a haiku about rust").await?;
//! ```

pub mod client;
pub mod models;

pub use client::{GeminiClient, GenerativeService};
pub use models::{Candidate, Content, GenerateRequest, GenerateResponse, Part, UsageMetadata};
