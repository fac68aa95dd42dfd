// ABOUTME: Completion client for OpenAI-compatible chat completion endpoints
// ABOUTME: Works with hosted services and local servers (Ollama, vLLM, LocalAI)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # OpenAI-Compatible Client
//!
//! Implementation of [`CompletionClient`] for any service speaking the
//! OpenAI chat-completions wire format.
//!
//! ## Configuration
//!
//! - `NUTRIPLAN_LLM_BASE_URL`: API endpoint (default: Ollama at localhost:11434)
//! - `NUTRIPLAN_LLM_MODEL`: model name (default: `llama3.1:8b-instruct`)
//! - `NUTRIPLAN_LLM_API_KEY`: bearer token (optional for local servers)
//! - `NUTRIPLAN_REQUEST_TIMEOUT_SECS`: per-request timeout (default 45)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::{CompletionClient, CompletionRequest, CompletionResponse};
use crate::errors::{AppError, AppResult};

const BASE_URL_ENV: &str = "NUTRIPLAN_LLM_BASE_URL";
const MODEL_ENV: &str = "NUTRIPLAN_LLM_MODEL";
const API_KEY_ENV: &str = "NUTRIPLAN_LLM_API_KEY";
const TIMEOUT_ENV: &str = "NUTRIPLAN_REQUEST_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
const DEFAULT_MODEL: &str = "llama3.1:8b-instruct";
const DEFAULT_TIMEOUT_SECS: u64 = 45;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ApiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ============================================================================
// Client Implementation
// ============================================================================

/// Configuration for an OpenAI-compatible endpoint
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// API base URL (up to and excluding `/chat/completions`)
    pub base_url: String,
    /// Bearer token, when the endpoint requires one
    pub api_key: Option<String>,
    /// Default model name
    pub default_model: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for OpenAiCompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            default_model: DEFAULT_MODEL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Completion client speaking the OpenAI chat-completions format
pub struct OpenAiCompatibleClient {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleClient {
    /// Create a client from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the HTTP client cannot be constructed.
    pub fn new(config: OpenAiCompatibleConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a client from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the HTTP client cannot be constructed.
    pub fn from_env() -> AppResult<Self> {
        let timeout_secs = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let config = OpenAiCompatibleConfig {
            base_url: std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            default_model: std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_owned()),
            timeout: Duration::from_secs(timeout_secs),
        };

        Self::new(config)
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => builder.header("Authorization", format!("Bearer {key}")),
            None => builder,
        }
    }

    /// Map a transport error to the pipeline taxonomy
    ///
    /// Timeouts are network errors by contract: the retry loop treats them
    /// the same as a dropped connection.
    fn transport_error(e: &reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::network(format!("completion request timed out: {e}"))
        } else {
            AppError::network(format!("failed to reach completion service: {e}"))
        }
    }

    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        let detail = serde_json::from_str::<ApiErrorResponse>(body).map_or_else(
            |_| body.chars().take(200).collect::<String>(),
            |parsed| parsed.error.message,
        );
        AppError::service(status.as_u16(), detail)
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatibleClient {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResponse> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.config.default_model.clone());

        debug!("Sending completion request ({} prompt chars)", request.prompt.len());

        let api_request = ApiRequest {
            model,
            messages: vec![ApiMessage {
                role: "user",
                content: request.prompt.clone(),
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };

        let response = self
            .authorized(self.client.post(self.api_url("chat/completions")))
            .header("Content-Type", "application/json")
            .json(&api_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send completion request: {e}");
                Self::transport_error(&e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read completion response: {e}");
            Self::transport_error(&e)
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let api_response: ApiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Completion service returned an unreadable envelope: {e}");
            AppError::service(status.as_u16(), format!("unreadable response envelope: {e}"))
        })?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::service(status.as_u16(), "response contained no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received completion: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(CompletionResponse {
            content,
            model: api_response.model,
            finish_reason: choice.finish_reason,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> AppResult<bool> {
        debug!("Performing completion service health check");

        let response = self
            .authorized(self.client.get(self.api_url("models")))
            .send()
            .await
            .map_err(|e| {
                error!("Health check failed: {e}");
                Self::transport_error(&e)
            })?;

        let healthy = response.status().is_success();
        if !healthy {
            warn!("Health check failed with status: {}", response.status());
        }

        Ok(healthy)
    }
}
