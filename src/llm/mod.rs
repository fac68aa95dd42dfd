// ABOUTME: Completion client abstraction for pluggable text-generation services
// ABOUTME: Defines the CompletionClient contract and request/response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Completion Client Interface
//!
//! The generation pipeline consumes exactly one operation from the outside
//! world: send prompt text to a completion service, get raw text back. The
//! raw text may be well-formed, malformed, or truncated; the pipeline assumes
//! nothing about its validity.
//!
//! Implementors map transport failures and timeouts to
//! [`ErrorCode::NetworkError`](crate::errors::ErrorCode::NetworkError) and
//! non-success responses to
//! [`ErrorCode::ServiceError`](crate::errors::ErrorCode::ServiceError).
//! Authentication and credentials are the implementor's concern.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutriplan::llm::{CompletionClient, CompletionRequest, OpenAiCompatibleClient};
//!
//! # async fn example() -> Result<(), nutriplan::errors::AppError> {
//! let client = OpenAiCompatibleClient::from_env()?;
//! let request = CompletionRequest::new("Plan a week of meals.");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

mod openai_compatible;

pub use openai_compatible::{OpenAiCompatibleClient, OpenAiCompatibleConfig};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

/// A single completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Prompt text sent to the generator
    pub prompt: String,
    /// Model identifier hint (provider-specific); `None` uses the default
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a new request from prompt text
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the model hint
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the token budget
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Raw completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Raw generated text, exactly as returned by the service
    pub content: String,
    /// Model that produced the text
    pub model: String,
    /// Finish reason reported by the service (stop, length, ...)
    pub finish_reason: Option<String>,
}

/// Contract for external text-generation services
///
/// Implementations are injected into the planner at construction time so
/// tests can substitute deterministic stubs.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Unique client identifier (e.g. "openai-compatible", "stub")
    fn name(&self) -> &'static str;

    /// Default model used when the request carries no hint
    fn default_model(&self) -> &str;

    /// Perform a completion
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` on transport failure or timeout, and
    /// `ServiceError` on a non-success response.
    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResponse>;

    /// Check that the service is reachable and credentials are valid
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` when the service cannot be reached.
    async fn health_check(&self) -> AppResult<bool>;
}
