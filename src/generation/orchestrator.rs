// ABOUTME: Retry orchestration driving the generation pipeline per attempt
// ABOUTME: Alternates prompt variants with bounded exponential backoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Menu Planner
//!
//! The retry state machine over generation attempts. Each attempt runs the
//! full pipeline (prompt, completion, sanitize, extract, validate, repair)
//! and every failure is caught at the attempt boundary; only exhaustion
//! after the final attempt is visible to the caller.
//!
//! Attempts alternate prompt strategy (odd attempts use the full prompt,
//! even attempts the simplified one) so a failure mode tied to one prompt
//! shape is not replayed five times. Transient network errors and
//! structural failures are retried identically: both are as likely to
//! resolve on a different prompt variant.
//!
//! The offline fallback path is separate and explicitly invoked; the online
//! path never silently substitutes synthetic content.

use std::sync::Arc;

use tokio::time::sleep;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::GenerationConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{CompletionClient, CompletionRequest, OpenAiCompatibleClient};
use crate::models::{MenuRequest, WeekMenu};

use super::prompt::{self, PromptVariant};
use super::seed::GenerationSeed;
use super::{extract, fallback, repair, sanitize, validate};

/// Orchestrates weekly menu generation against an injected completion client
pub struct MenuPlanner {
    client: Arc<dyn CompletionClient>,
    config: GenerationConfig,
}

impl MenuPlanner {
    /// Create a planner with an explicit client and configuration
    #[must_use]
    pub fn new(client: Arc<dyn CompletionClient>, config: GenerationConfig) -> Self {
        Self { client, config }
    }

    /// Create a planner from environment configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the HTTP client cannot be constructed.
    pub fn from_env() -> AppResult<Self> {
        let config = GenerationConfig::from_env();
        let client = OpenAiCompatibleClient::from_env()?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate a weekly menu through the online pipeline
    ///
    /// Attempts run strictly in sequence; attempt N+1 only starts after
    /// attempt N has fully failed and the backoff delay has elapsed.
    ///
    /// # Errors
    ///
    /// Returns `ExhaustedRetries` (wrapping the last attempt's error) after
    /// all attempts fail. No other error escapes the retry loop.
    pub async fn generate_week_menu(&self, request: &MenuRequest) -> AppResult<WeekMenu> {
        let request_id = Uuid::new_v4();
        let seed = GenerationSeed::from_request(request);
        info!(%request_id, seed = seed.value(), "starting weekly menu generation");

        let mut last_error: Option<AppError> = None;

        for attempt in 1..=self.config.max_attempts {
            let backoff = self.config.backoff_before_attempt(attempt);
            if !backoff.is_zero() {
                debug!(attempt, backoff_ms = backoff.as_millis() as u64, "backing off before retry");
                sleep(backoff).await;
            }

            let variant = if attempt % 2 == 1 {
                PromptVariant::Full
            } else {
                PromptVariant::Simplified
            };

            debug!(attempt, ?variant, "starting generation attempt");
            match self.run_attempt(request, seed, variant).await {
                Ok(menu) => {
                    info!(%request_id, attempt, "weekly menu generated");
                    return Ok(menu);
                }
                Err(error) => {
                    warn!(%request_id, attempt, %error, "generation attempt failed");
                    last_error =
                        Some(error.with_attempt(attempt).with_request_id(request_id.to_string()));
                }
            }
        }

        let last = last_error
            .unwrap_or_else(|| AppError::internal("retry loop finished without running an attempt"));
        Err(AppError::exhausted_retries(self.config.max_attempts, last)
            .with_request_id(request_id.to_string()))
    }

    /// Generate a weekly menu offline, deterministically, without the
    /// external generator
    ///
    /// Never fails; intended for explicit caller-driven fallback only.
    #[must_use]
    pub fn generate_fallback_week_menu(&self, request: &MenuRequest) -> WeekMenu {
        fallback::generate(request)
    }

    /// One full pipeline pass: prompt, complete, sanitize, extract,
    /// validate, and a single repair-and-revalidate on structural failure
    async fn run_attempt(
        &self,
        request: &MenuRequest,
        seed: GenerationSeed,
        variant: PromptVariant,
    ) -> AppResult<WeekMenu> {
        let prompt_text = prompt::build(request, seed, variant);
        let completion_request = CompletionRequest::new(prompt_text)
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);

        let completion = self.client.complete(&completion_request).await?;
        let cleaned = sanitize::sanitize(&completion.content);
        let candidate = extract::extract(&cleaned)?;

        match validate::validate(&candidate) {
            Ok(menu) => Ok(menu),
            Err(validation_error) => {
                debug!(%validation_error, "candidate rejected; trying repair");
                repair::repair(&candidate).map_or(Err(validation_error), |repaired| {
                    validate::validate(&repaired)
                })
            }
        }
    }
}
